/// Output formatting: text, JSON, path modes.
use std::io::Write;

use comfy_table::{Cell, Table, presets::UTF8_BORDERS_ONLY};
use serde::Serialize;

use super::args::OutputFormat;
use crate::types::{ErrorOutput, MatchOutput, MergeOutput};

/// Resolve the effective output format, handling the `--json` shorthand.
#[must_use]
pub fn resolve_format(fmt: OutputFormat, json_flag: bool) -> OutputFormat {
    if json_flag { OutputFormat::Json } else { fmt }
}

/// Output context passed to all formatters.
pub struct OutputCtx {
    pub format: OutputFormat,
    pub no_header: bool,
    /// When true, emit phase timings.
    pub debug: bool,
}

impl OutputCtx {
    /// Construct from CLI args.
    #[must_use]
    pub fn new(fmt: OutputFormat, json_flag: bool, no_header: bool, debug: bool) -> Self {
        Self {
            format: resolve_format(fmt, json_flag),
            no_header,
            debug,
        }
    }

    /// Start a named phase timer. Logs elapsed on drop only when `--debug` is set.
    #[must_use]
    pub fn timer(&self, label: &'static str) -> DebugTimer {
        DebugTimer::new(label, self.debug)
    }
}

// --- Merge summary ---

/// Write the success report to stdout.
///
/// `what` names the merged files in the text message (e.g. "Markdown files").
pub fn write_summary(summary: &MergeOutput, what: &str, ctx: &OutputCtx) {
    match ctx.format {
        OutputFormat::Json => print_json(summary),
        OutputFormat::Path => println!("{}", summary.output),
        OutputFormat::Text => {
            println!("{what} have been merged into {}", summary.output);
        }
    }
}

// --- Dry-run listing ---

/// Write the matched files to stdout.
pub fn write_matches(matches: &[MatchOutput], ctx: &OutputCtx) {
    match ctx.format {
        OutputFormat::Json => print_json(matches),
        OutputFormat::Path => {
            for m in matches {
                println!("{}", m.path);
            }
        }
        OutputFormat::Text => write_matches_table(matches, ctx),
    }
}

fn write_matches_table(matches: &[MatchOutput], ctx: &OutputCtx) {
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    if !ctx.no_header {
        table.set_header(["PATH", "BYTES"]);
    }
    for m in matches {
        table.add_row([
            Cell::new(&m.path),
            Cell::new(m.bytes.map(|b| b.to_string()).unwrap_or_default()),
        ]);
    }
    println!("{table}");
}

// --- Error output ---

/// Write a structured error to stdout, next to the status line it replaces.
pub fn write_error(err: &ErrorOutput, format: OutputFormat, json_flag: bool) {
    let fmt = resolve_format(format, json_flag);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match fmt {
        OutputFormat::Json => {
            let s = serde_json::to_string_pretty(err).unwrap_or_default();
            let _ = writeln!(out, "{s}");
        }
        OutputFormat::Text | OutputFormat::Path => {
            let _ = writeln!(out, "Error: {}", err.error.message);
        }
    }
}

// --- Debug timer ---

/// A RAII timer that logs elapsed milliseconds on drop.
///
/// Created via [`OutputCtx::timer`]. Does nothing when `debug` is false.
pub struct DebugTimer {
    label: &'static str,
    start: std::time::Instant,
    active: bool,
}

impl DebugTimer {
    #[must_use]
    fn new(label: &'static str, active: bool) -> Self {
        Self {
            label,
            start: std::time::Instant::now(),
            active,
        }
    }
}

impl Drop for DebugTimer {
    fn drop(&mut self) {
        if self.active {
            let ms = self.start.elapsed().as_secs_f64() * 1000.0;
            tracing::debug!(phase = self.label, elapsed_ms = ms, "timing");
        }
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{s}"),
        Err(e) => eprintln!("JSON serialization error: {e}"),
    }
}
