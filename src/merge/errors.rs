/// Errors from the merge domain layer.
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while collecting, reading, or writing files.
#[derive(Debug, Error)]
pub enum MergeError {
    /// The directory walk failed (missing root, permission denied, loop).
    #[error("An error occurred while merging files: {source}")]
    Walk {
        /// Path being visited when the walk failed, if known.
        path: Option<PathBuf>,
        /// Underlying walk error.
        #[source]
        source: walkdir::Error,
    },

    /// A matched file could not be read.
    #[error("An error occurred while merging files: {}: {source}", path.display())]
    Read {
        /// The file that failed to read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The output file could not be created or written.
    #[error("An error occurred while writing to file: {}: {source}", path.display())]
    Write {
        /// The output path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

impl From<walkdir::Error> for MergeError {
    fn from(source: walkdir::Error) -> Self {
        Self::Walk {
            path: source.path().map(PathBuf::from),
            source,
        }
    }
}

/// Exit code mapping for `MergeError` variants.
impl MergeError {
    /// Return the CLI exit code for this error.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Walk { .. } | Self::Read { .. } => 2,
            Self::Write { .. } => 3,
        }
    }

    /// Machine-readable error code (`snake_case`).
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Walk { .. } => "walk_failed",
            Self::Read { .. } => "read_failed",
            Self::Write { .. } => "write_failed",
        }
    }

    /// The path the error is about, if any.
    #[must_use]
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            Self::Walk { path, .. } => path.as_deref(),
            Self::Read { path, .. } | Self::Write { path, .. } => Some(path),
        }
    }
}
