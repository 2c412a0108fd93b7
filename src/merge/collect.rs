/// Directory walk and suffix filtering.
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::errors::MergeError;
use super::request::MergeRequest;

/// Whether a base name ends with the literal `suffix` (e.g. `".txt"`).
///
/// This is a plain string comparison, not an extension parse: `notes.txt`
/// matches `.txt`, while `notestxt` and `notes.TXT` do not.
#[must_use]
pub fn matches_suffix(name: &str, suffix: &str) -> bool {
    name.ends_with(suffix)
}

/// Walk `request.root` and return every non-directory entry whose base name
/// ends with the request's suffix.
///
/// Entries are yielded pre-order, sorted by file name within each directory.
/// The output file is skipped if it already exists inside the tree.
///
/// # Errors
///
/// Returns `MergeError::Walk` on the first traversal failure.
pub fn collect(request: &MergeRequest) -> Result<Vec<PathBuf>, MergeError> {
    let suffix = request.suffix();
    let output = existing_output(&request.output);

    let mut files = Vec::new();
    for entry in WalkDir::new(&request.root).sort_by_file_name() {
        let entry = entry?;
        if entry.file_type().is_dir() {
            continue;
        }

        if !matches_suffix(&entry.file_name().to_string_lossy(), &suffix) {
            continue;
        }

        if is_output(entry.path(), output.as_deref()) {
            tracing::info!(path = %entry.path().display(), "skipping the output file");
            continue;
        }

        tracing::debug!(path = %entry.path().display(), "matched");
        files.push(entry.into_path());
    }

    tracing::info!(root = %request.root.display(), count = files.len(), "collected files");
    Ok(files)
}

fn existing_output(output: &Path) -> Option<PathBuf> {
    std::fs::canonicalize(output).ok()
}

fn is_output(path: &Path, output: Option<&Path>) -> bool {
    let Some(output) = output else {
        return false;
    };
    if path.file_name() != output.file_name() {
        return false;
    }
    std::fs::canonicalize(path).is_ok_and(|p| p == output)
}
