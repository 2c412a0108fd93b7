/// CLI argument definitions via clap derive.
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// fmerge — merge files with a given extension into one output file.
#[derive(Debug, Parser)]
#[command(
    name = "fmerge",
    about = "Recursively merge files with a given extension into a single output file",
    version,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Report format for the status line, dry-run listings and errors.
    #[arg(long, global = true, value_name = "FORMAT", default_value = "text")]
    pub format: OutputFormat,

    /// Shorthand for --format json.
    #[arg(long, global = true, conflicts_with = "format")]
    pub json: bool,

    /// Omit table headers in --dry-run listings.
    #[arg(long, global = true)]
    pub no_header: bool,

    /// Log every visited file and phase timings to stderr.
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Report format variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// Human-readable status line; aligned table for --dry-run.
    #[default]
    Text,
    /// JSON object or array (pretty-printed).
    Json,
    /// Paths only, one per line.
    Path,
}

/// All subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Merge every file ending in `.<extension>`, with optional separators and code fences.
    Files(FilesArgs),
    /// Merge every Markdown (`.md`) file as-is.
    Md(MarkdownArgs),
}

/// Arguments for `fmerge files`.
#[derive(Debug, Parser)]
pub struct FilesArgs {
    /// Directory to scan recursively.
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub path: PathBuf,

    /// Output file name.
    #[arg(short, long, value_name = "FILE", default_value = "merged.txt")]
    pub output: PathBuf,

    /// Extension to match, without the leading dot.
    #[arg(short = 'x', long, value_name = "EXT", default_value = "txt")]
    pub extension: String,

    /// Insert a `// # <file> Contents:` line before each file.
    #[arg(short, long)]
    pub separator: bool,

    /// List the matched files without writing the output.
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for `fmerge md`.
#[derive(Debug, Parser)]
pub struct MarkdownArgs {
    /// Directory to scan recursively.
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub path: PathBuf,

    /// Output file name.
    #[arg(short, long, value_name = "FILE", default_value = "merged.md")]
    pub output: PathBuf,

    /// List the matched files without writing the output.
    #[arg(long)]
    pub dry_run: bool,
}
