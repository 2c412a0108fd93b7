/// `md` command: merge every Markdown file without decoration.
use crate::cli::OutputCtx;
use crate::cli::args::MarkdownArgs;
use crate::merge::{MergeError, MergeRequest};

/// Run `fmerge md`.
///
/// # Errors
///
/// Returns `MergeError` on traversal, read, or write failure.
pub fn run(args: &MarkdownArgs, ctx: &OutputCtx) -> Result<(), MergeError> {
    let request = MergeRequest::markdown(&args.path, &args.output);
    tracing::debug!(?request, "markdown merge");
    super::execute(&request, "Markdown files", args.dry_run, ctx)
}
