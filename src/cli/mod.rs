/// CLI layer: argument parsing, output formatting, logging setup.
pub mod args;
pub mod logging;
pub mod output;

pub use args::Cli;
pub use logging::init_tracing;
pub use output::{OutputCtx, write_error};
