//! Image encoding for multimodal messages
//!
//! Vision-capable models accept images as base64 data URLs embedded in the
//! message content. The MIME type is inferred from the file extension.

use anyhow::{Context, Result};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use std::fs;
use std::path::Path;

/// Encode an image file as a base64 data URL
///
/// # Errors
///
/// Returns error if the file cannot be read.
pub fn encode_image_data_url(path: &Path) -> Result<String> {
    let bytes = fs::read(path)
        .with_context(|| format!("Failed to read image file: {}", path.display()))?;
    let encoded = STANDARD.encode(&bytes);
    Ok(format!("data:{};base64,{}", mime_for_path(path), encoded))
}

/// Infer an image MIME type from the file extension, defaulting to PNG
fn mime_for_path(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());

    match extension.as_deref() {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        _ => "image/png",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::Builder;

    #[test]
    fn test_mime_for_known_extensions() {
        assert_eq!(mime_for_path(Path::new("a.png")), "image/png");
        assert_eq!(mime_for_path(Path::new("a.JPG")), "image/jpeg");
        assert_eq!(mime_for_path(Path::new("a.jpeg")), "image/jpeg");
        assert_eq!(mime_for_path(Path::new("a.gif")), "image/gif");
    }

    #[test]
    fn test_mime_defaults_to_png() {
        assert_eq!(mime_for_path(Path::new("a.webp")), "image/png");
        assert_eq!(mime_for_path(Path::new("noext")), "image/png");
    }

    #[test]
    fn test_encode_data_url_shape() {
        let mut file = Builder::new().suffix(".png").tempfile().unwrap();
        file.write_all(&[0x89, 0x50, 0x4e, 0x47]).unwrap();
        file.flush().unwrap();

        let url = encode_image_data_url(file.path()).unwrap();
        assert!(url.starts_with("data:image/png;base64,"));
        assert!(url.len() > "data:image/png;base64,".len());
    }

    #[test]
    fn test_encode_missing_file_errors() {
        let result = encode_image_data_url(Path::new("data/does-not-exist.png"));
        assert!(result.is_err());
    }
}
