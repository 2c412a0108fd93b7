/// Merge domain layer: collection, fencing, rendering, writing.
pub mod collect;
pub mod errors;
pub mod fence;
pub mod render;
pub mod request;
pub mod write;

use std::path::PathBuf;

pub use collect::collect;
pub use errors::MergeError;
pub use render::render;
pub use request::MergeRequest;
pub use write::write_output;

/// What a completed merge produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeSummary {
    /// The file that was written.
    pub output: PathBuf,
    /// Number of files concatenated.
    pub files: usize,
    /// Bytes written.
    pub bytes: usize,
}

/// Collect, render and write in one run.
///
/// Nothing is written unless the walk and every read succeed.
///
/// # Errors
///
/// Returns `MergeError` on traversal, read, or write failure.
pub fn merge(request: &MergeRequest) -> Result<MergeSummary, MergeError> {
    let files = collect(request)?;
    let buffer = render(request, &files)?;
    if buffer.is_empty() {
        tracing::warn!(
            root = %request.root.display(),
            suffix = %request.suffix(),
            "no files matched"
        );
    }
    write_output(&request.output, buffer.as_bytes())?;
    Ok(MergeSummary {
        output: request.output.clone(),
        files: buffer.files(),
        bytes: buffer.len(),
    })
}
