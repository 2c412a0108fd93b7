/// Flushing the merged buffer to disk.
use std::fs::OpenOptions;
use std::io::Write;
#[cfg(unix)]
use std::os::unix::fs::OpenOptionsExt;
use std::path::Path;

use super::errors::MergeError;

/// Permission bits for a newly created output file.
#[cfg(unix)]
const OUTPUT_MODE: u32 = 0o644;

/// Create or truncate `path` and write `bytes` in one pass.
///
/// # Errors
///
/// Returns `MergeError::Write` if the file cannot be created or written.
pub fn write_output(path: &Path, bytes: &[u8]) -> Result<(), MergeError> {
    let to_err = |source| MergeError::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    options.mode(OUTPUT_MODE);

    let mut file = options.open(path).map_err(to_err)?;
    file.write_all(bytes).map_err(to_err)?;
    tracing::info!(path = %path.display(), bytes = bytes.len(), "wrote output");
    Ok(())
}
