use std::path::Path;

use image::ImageFormat;

/// MIME type reported for files whose extension is not a known image format
pub const FALLBACK_MIME: &str = "application/octet-stream";

/// Derive a file's MIME type from its extension.
///
/// Only the name is inspected, so no bytes are read before the file is accepted.
pub fn mime_for_path(path: &Path) -> String {
    path.extension()
        .and_then(ImageFormat::from_extension)
        .map(|format| format.to_mime_type().to_string())
        .unwrap_or_else(|| FALLBACK_MIME.to_string())
}

/// Only `image/*` files are accepted into a slot
pub fn is_image(mime: &str) -> bool {
    mime.starts_with("image/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_image_extensions() {
        assert_eq!(mime_for_path(Path::new("a/b/banner.png")), "image/png");
        assert_eq!(mime_for_path(Path::new("photo.JPG")), "image/jpeg");
        assert_eq!(mime_for_path(Path::new("anim.gif")), "image/gif");
    }

    #[test]
    fn test_unknown_extension_falls_back() {
        assert_eq!(mime_for_path(Path::new("notes.txt")), FALLBACK_MIME);
        assert_eq!(mime_for_path(Path::new("no_extension")), FALLBACK_MIME);
    }

    #[test]
    fn test_is_image() {
        assert!(is_image("image/webp"));
        assert!(!is_image(FALLBACK_MIME));
        assert!(!is_image("text/plain"));
    }
}
