/// The immutable description of one merge run.
use std::path::PathBuf;

/// Everything a merge needs, built once from the parsed CLI arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeRequest {
    /// Directory to walk recursively.
    pub root: PathBuf,
    /// Destination file; overwritten if it exists.
    pub output: PathBuf,
    /// Suffix to match, without the leading dot.
    pub extension: String,
    /// Prepend a `// # <name> Contents:` line before each file.
    pub separator: bool,
    /// Wrap contents in a code fence when the extension has a known language.
    pub fences: bool,
}

impl MergeRequest {
    /// A generalized request: separator as given, fences enabled.
    #[must_use]
    pub fn new(
        root: impl Into<PathBuf>,
        output: impl Into<PathBuf>,
        extension: &str,
        separator: bool,
    ) -> Self {
        Self {
            root: root.into(),
            output: output.into(),
            extension: extension.trim_start_matches('.').to_owned(),
            separator,
            fences: true,
        }
    }

    /// The Markdown-only request: `.md` files, raw contents, no decoration.
    #[must_use]
    pub fn markdown(root: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            output: output.into(),
            extension: "md".to_owned(),
            separator: false,
            fences: false,
        }
    }

    /// The literal suffix a base name must end with to be merged.
    #[must_use]
    pub fn suffix(&self) -> String {
        format!(".{}", self.extension)
    }
}
