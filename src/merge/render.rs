/// Building the merged buffer from the collected files.
use std::path::{Path, PathBuf};

use super::errors::MergeError;
use super::fence::{FENCE, fence_for};
use super::request::MergeRequest;

/// The merged output, held entirely in memory until it is written once.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MergedBuffer {
    bytes: Vec<u8>,
    files: usize,
}

impl MergedBuffer {
    /// Number of files appended so far.
    #[must_use]
    pub fn files(&self) -> usize {
        self.files
    }

    /// Size of the accumulated output in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether nothing has been appended.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// The raw bytes to be written.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    fn push_line(&mut self, line: &str) {
        self.bytes.extend_from_slice(line.as_bytes());
        self.bytes.push(b'\n');
    }

    /// Append one file's decorated content.
    ///
    /// Layout: optional separator line, optional opening fence, the content
    /// plus a newline, optional closing fence, then a blank padding line.
    pub fn append(&mut self, name: &str, content: &[u8], separator: bool, fence: Option<&str>) {
        if separator {
            self.push_line(&format!("// # {name} Contents:"));
        }
        if let Some(tag) = fence {
            self.push_line(&format!("{FENCE}{tag}"));
        }
        self.bytes.extend_from_slice(content);
        self.bytes.push(b'\n');
        if fence.is_some() {
            self.push_line(FENCE);
        }
        self.bytes.push(b'\n');
        self.files += 1;
    }
}

/// Read every file in order and append it to a fresh buffer.
///
/// # Errors
///
/// Returns `MergeError::Read` for the first file that cannot be read; the
/// partial buffer is dropped.
pub fn render(request: &MergeRequest, files: &[PathBuf]) -> Result<MergedBuffer, MergeError> {
    let fence = if request.fences {
        fence_for(&request.extension)
    } else {
        None
    };

    let mut buffer = MergedBuffer::default();
    for path in files {
        let content = std::fs::read(path).map_err(|source| MergeError::Read {
            path: path.clone(),
            source,
        })?;
        tracing::debug!(path = %path.display(), bytes = content.len(), "appending");
        buffer.append(&base_name(path), &content, request.separator, fence);
    }
    Ok(buffer)
}

fn base_name(path: &Path) -> String {
    path.file_name()
        .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned())
}
