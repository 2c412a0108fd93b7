//! Code-fence language tags keyed by file extension.

/// Opening and closing marker of a fenced block.
pub const FENCE: &str = "```";

/// Return the fence language tag for an extension, or `None` for plain concatenation.
///
/// The match is exact and case-sensitive: `Py` does not map to `python`.
#[must_use]
pub fn fence_for(extension: &str) -> Option<&'static str> {
    match extension {
        "py" => Some("python"),
        "go" => Some("go"),
        "js" => Some("javascript"),
        "java" => Some("java"),
        "cs" => Some("csharp"),
        "cpp" | "cxx" | "cc" => Some("cpp"),
        "rb" => Some("ruby"),
        "php" => Some("php"),
        _ => None,
    }
}
