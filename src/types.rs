/// Shared serializable output types for all commands.
///
/// These types are what gets written to stdout — either as JSON or rendered
/// as text/table. They are decoupled from the internal `MergeSummary` type.
use serde::{Deserialize, Serialize};

use crate::merge::{MergeError, MergeSummary};

/// Result of a completed merge.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MergeOutput {
    /// Always `true`.
    pub ok: bool,
    /// Path of the written file.
    pub output: String,
    /// Number of files concatenated.
    pub files: usize,
    /// Bytes written.
    pub bytes: usize,
}

impl From<&MergeSummary> for MergeOutput {
    fn from(summary: &MergeSummary) -> Self {
        Self {
            ok: true,
            output: summary.output.display().to_string(),
            files: summary.files,
            bytes: summary.bytes,
        }
    }
}

/// A file that would be merged (`--dry-run`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchOutput {
    /// Path as visited during the walk.
    pub path: String,
    /// File size in bytes, or null if metadata could not be read.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bytes: Option<u64>,
}

/// A structured error envelope for JSON error output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorOutput {
    /// Always `false`.
    pub ok: bool,
    /// Error details.
    pub error: ErrorDetail,
}

/// Error detail in the JSON error envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// Machine-readable error code (`snake_case`).
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// The path the failure is about, if known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl ErrorOutput {
    /// Construct from a `MergeError`.
    #[must_use]
    pub fn from_merge_error(err: &MergeError) -> Self {
        Self {
            ok: false,
            error: ErrorDetail {
                code: err.code().to_owned(),
                message: err.to_string(),
                path: err.path().map(|p| p.display().to_string()),
            },
        }
    }
}
