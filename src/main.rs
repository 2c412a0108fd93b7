#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! fmerge — recursively merge files with a given extension into one file.

mod cli;
mod commands;
mod merge;
mod types;

use clap::Parser;

use cli::{Cli, OutputCtx, init_tracing, write_error};
use types::ErrorOutput;

/// Exit code for malformed or missing arguments.
const USAGE_EXIT_CODE: i32 = 1;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // --help / --version go to stdout and exit 0.
        Err(err) if !err.use_stderr() => err.exit(),
        Err(err) => {
            let _ = err.print();
            std::process::exit(USAGE_EXIT_CODE);
        }
    };

    init_tracing(cli.debug);

    let ctx = OutputCtx::new(cli.format, cli.json, cli.no_header, cli.debug);

    match commands::dispatch(&cli.command, &ctx) {
        Ok(()) => {}
        Err(err) => {
            tracing::debug!(error = ?err, "merge failed");
            let error_output = ErrorOutput::from_merge_error(&err);
            write_error(&error_output, cli.format, cli.json);
            std::process::exit(err.exit_code());
        }
    }
}
