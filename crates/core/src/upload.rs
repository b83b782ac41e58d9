//! Uploaded-image validation.
//!
//! Runs before any storage backend is touched: extension allow-list,
//! size cap, and declared MIME type must all pass, otherwise the upload
//! is rejected as a whole.

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Maximum accepted upload size (10 MiB).
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// File extensions accepted for uploaded images (lowercase, with dot).
pub const ALLOWED_EXTENSIONS: &[&str] = &[".jpg", ".jpeg", ".png", ".gif", ".webp", ".bmp"];

/// Declared content types accepted for uploaded images.
pub const ALLOWED_CONTENT_TYPES: &[&str] = &[
    "image/jpeg",
    "image/jpg",
    "image/png",
    "image/gif",
    "image/webp",
    "image/bmp",
];

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Extract the lowercased extension (including the dot) from a file name.
///
/// Returns an empty string when the name has no extension.
pub fn file_extension(file_name: &str) -> String {
    match file_name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() && !ext.is_empty() => {
            format!(".{}", ext.to_ascii_lowercase())
        }
        _ => String::new(),
    }
}

/// Validate an upload's file name, size, and declared content type.
///
/// Returns the normalized extension on success so callers hand the exact
/// same value to the storage backend.
pub fn validate_upload(
    file_name: &str,
    size_bytes: usize,
    content_type: &str,
) -> Result<String, CoreError> {
    let extension = file_extension(file_name);
    if !ALLOWED_EXTENSIONS.contains(&extension.as_str()) {
        return Err(CoreError::Validation(format!(
            "Invalid file extension '{extension}'"
        )));
    }

    if size_bytes > MAX_UPLOAD_BYTES {
        return Err(CoreError::Validation(format!(
            "File size {size_bytes} exceeds the {MAX_UPLOAD_BYTES} byte limit"
        )));
    }

    let content_type = content_type.to_ascii_lowercase();
    if !ALLOWED_CONTENT_TYPES.contains(&content_type.as_str()) {
        return Err(CoreError::Validation(format!(
            "Invalid content type '{content_type}'"
        )));
    }

    Ok(extension)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_is_lowercased_with_dot() {
        assert_eq!(file_extension("photo.JPG"), ".jpg");
        assert_eq!(file_extension("archive.tar.gz"), ".gz");
    }

    #[test]
    fn extension_missing_or_degenerate() {
        assert_eq!(file_extension("noext"), "");
        assert_eq!(file_extension(".hidden"), "");
        assert_eq!(file_extension("trailing."), "");
    }

    #[test]
    fn accepts_valid_image() {
        let ext = validate_upload("cat.png", 1024, "image/png").unwrap();
        assert_eq!(ext, ".png");
    }

    #[test]
    fn accepts_uppercase_name_and_content_type() {
        let ext = validate_upload("CAT.WEBP", 1024, "IMAGE/WEBP").unwrap();
        assert_eq!(ext, ".webp");
    }

    #[test]
    fn rejects_disallowed_extension() {
        assert!(validate_upload("notes.txt", 10, "image/png").is_err());
        assert!(validate_upload("noext", 10, "image/png").is_err());
    }

    #[test]
    fn rejects_oversized_file() {
        assert!(validate_upload("big.jpg", MAX_UPLOAD_BYTES + 1, "image/jpeg").is_err());
    }

    #[test]
    fn accepts_file_at_size_limit() {
        assert!(validate_upload("edge.jpg", MAX_UPLOAD_BYTES, "image/jpeg").is_ok());
    }

    #[test]
    fn rejects_mismatched_content_type() {
        assert!(validate_upload("cat.png", 10, "text/plain").is_err());
        assert!(validate_upload("cat.png", 10, "application/octet-stream").is_err());
    }
}
