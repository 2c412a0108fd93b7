/// Command dispatch: routes `Command` enum variants to their implementations.
pub mod files;
pub mod markdown;

use crate::cli::OutputCtx;
use crate::cli::args::Command;
use crate::cli::output::{write_matches, write_summary};
use crate::merge::{MergeError, MergeRequest, collect, merge};
use crate::types::{MatchOutput, MergeOutput};

/// Dispatch a parsed `Command` to its handler.
///
/// # Errors
///
/// Returns `MergeError` on any command failure.
pub fn dispatch(command: &Command, ctx: &OutputCtx) -> Result<(), MergeError> {
    match command {
        Command::Files(args) => files::run(args, ctx),
        Command::Md(args) => markdown::run(args, ctx),
    }
}

/// Run a merge (or its dry run) and report the result.
///
/// `what` names the merged files in the text report.
fn execute(
    request: &MergeRequest,
    what: &str,
    dry_run: bool,
    ctx: &OutputCtx,
) -> Result<(), MergeError> {
    if dry_run {
        let _t_collect = ctx.timer("collect");
        let matches: Vec<MatchOutput> = collect(request)?
            .iter()
            .map(|path| MatchOutput {
                path: path.display().to_string(),
                bytes: match std::fs::metadata(path) {
                    Ok(meta) => Some(meta.len()),
                    Err(err) => {
                        tracing::debug!(path = %path.display(), %err, "no size");
                        None
                    }
                },
            })
            .collect();
        write_matches(&matches, ctx);
        return Ok(());
    }

    let t_merge = ctx.timer("merge");
    let summary = merge(request)?;
    drop(t_merge);

    write_summary(&MergeOutput::from(&summary), what, ctx);
    Ok(())
}
