//! # Upload Validation
//!
//! File checks shared by the API layer and the media store: an extension
//! allow-list and a request size cap. Nothing here looks at file contents.

use crate::error::{AppError, Result};

/// Maximum accepted request/upload size, in bytes.
pub const MAX_UPLOAD_BYTES: usize = 2 * 1024 * 1024;

/// Extensions accepted for image uploads, lowercase.
pub const ALLOWED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif"];

/// Extracts and validates the extension of an uploaded filename.
///
/// Returns the lowercased extension on success. A filename without an
/// extension, or with one outside the allow-list, is a validation error.
pub fn validate_extension(filename: &str) -> Result<String> {
    let ext = filename
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase());
    match ext {
        Some(ext) if ALLOWED_EXTENSIONS.contains(&ext.as_str()) => Ok(ext),
        _ => Err(AppError::Validation(format!(
            "file type not allowed: {filename}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allowed_extensions_pass() {
        assert_eq!(validate_extension("cat.png").unwrap(), "png");
        assert_eq!(validate_extension("photo.JPEG").unwrap(), "jpeg");
        assert_eq!(validate_extension("anim.Gif").unwrap(), "gif");
    }

    #[test]
    fn disallowed_extension_is_rejected() {
        assert!(validate_extension("a.txt").is_err());
        assert!(validate_extension("script.png.exe").is_err());
    }

    #[test]
    fn missing_extension_is_rejected() {
        assert!(validate_extension("noextension").is_err());
        assert!(validate_extension("").is_err());
    }
}
