//! Document loading for analysis prompts
//!
//! Long documents are inlined directly into the prompt, so they have to fit
//! the model's context window. Loading truncates at a character budget and
//! appends an explicit marker so the model knows the text is incomplete.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::warn;

/// Marker appended when a document is cut at the character budget
const TRUNCATION_MARKER: &str = "\n\n[Content truncated due to length...]";

/// Load a text document, truncated to `max_chars` characters
///
/// # Errors
///
/// Returns error if the file cannot be read.
pub fn load_document(path: &Path, max_chars: usize) -> Result<String> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read document: {}", path.display()))?;
    Ok(truncate_document(content, max_chars))
}

fn truncate_document(content: String, max_chars: usize) -> String {
    if content.chars().count() <= max_chars {
        return content;
    }

    warn!(
        "Document truncated to {} characters before sending",
        max_chars
    );
    let mut truncated: String = content.chars().take(max_chars).collect();
    truncated.push_str(TRUNCATION_MARKER);
    truncated
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_short_document_untouched() {
        let result = truncate_document("short text".to_string(), 100);
        assert_eq!(result, "short text");
    }

    #[test]
    fn test_long_document_truncated_with_marker() {
        let result = truncate_document("abcdef".repeat(100), 10);
        assert!(result.starts_with("abcdefabcd"));
        assert!(result.ends_with(TRUNCATION_MARKER));
        assert_eq!(result.chars().count(), 10 + TRUNCATION_MARKER.chars().count());
    }

    #[test]
    fn test_load_document_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "# Cheatsheet\n\ntensors everywhere").unwrap();
        file.flush().unwrap();

        let content = load_document(file.path(), 1000).unwrap();
        assert!(content.starts_with("# Cheatsheet"));
    }

    #[test]
    fn test_load_missing_document_errors() {
        assert!(load_document(Path::new("data/absent.md"), 10).is_err());
    }
}
