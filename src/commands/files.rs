/// `files` command: merge every file with the given extension.
use crate::cli::OutputCtx;
use crate::cli::args::FilesArgs;
use crate::merge::{MergeError, MergeRequest};

/// Run `fmerge files`.
///
/// # Errors
///
/// Returns `MergeError` on traversal, read, or write failure.
pub fn run(args: &FilesArgs, ctx: &OutputCtx) -> Result<(), MergeError> {
    let request = MergeRequest::new(&args.path, &args.output, &args.extension, args.separator);
    tracing::debug!(?request, "files merge");
    let what = format!("{} files", request.suffix());
    super::execute(&request, &what, args.dry_run, ctx)
}
