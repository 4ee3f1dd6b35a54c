//! Supported artifact extensions.

use crate::error::{Result, VaultError};

/// Extension used when none is chosen.
pub const DEFAULT_EXTENSION: &str = ".txt";

/// Every extension an artifact may be saved with.
pub const EXTENSIONS: &[&str] = &[
    ".txt", ".md", ".json", ".yaml", ".yml", ".toml", ".js", ".ts", ".jsx", ".tsx", ".html",
    ".css", ".scss", ".sass", ".java", ".py", ".rs", ".go", ".cpp", ".c", ".h", ".cs", ".php",
    ".rb", ".swift", ".kt", ".m", ".mm", ".scala", ".groovy", ".dart", ".lua", ".r", ".jl",
    ".hs", ".clj", ".fs", ".zig", ".nim", ".v", ".sv", ".glsl", ".hlsl", ".usf", ".shader",
    ".sh", ".bash", ".ps1", ".bat", ".cmd", ".env", ".ini", ".cfg", ".lock", ".xml", ".gradle",
    ".make", ".mk",
];

/// Resolve user input to one of [`EXTENSIONS`].
///
/// The leading dot is optional and matching ignores case. Empty input maps to
/// `default`, which must itself be a supported extension.
pub fn resolve_extension(input: &str, default: &str) -> Result<&'static str> {
    let trimmed = input.trim();
    let candidate = if trimmed.is_empty() { default.trim() } else { trimmed };

    let lowered = candidate.to_lowercase();
    let dotted = if lowered.starts_with('.') {
        lowered
    } else {
        format!(".{}", lowered)
    };

    EXTENSIONS
        .iter()
        .copied()
        .find(|ext| *ext == dotted)
        .ok_or_else(|| VaultError::UnknownExtension(candidate.to_string()))
}
