/// Variant file handling
///
/// This module handles:
/// - Deriving MIME types and rejecting non-image files
/// - Probing pixel dimensions of selected files
/// - Opening the native file picker

pub mod loader;
pub mod mime;

use std::path::PathBuf;

/// Show the native file picker for one variant
///
/// Starts in `start_dir` when it still exists. Returns `None` if the user cancelled.
pub async fn pick_file(title: String, start_dir: Option<PathBuf>) -> Option<PathBuf> {
    let mut dialog = rfd::AsyncFileDialog::new()
        .set_title(title)
        .add_filter("Images", &["png", "jpg", "jpeg", "gif", "webp", "bmp", "tiff", "ico"])
        .add_filter("All files", &["*"]);

    if let Some(dir) = start_dir {
        if dir.exists() {
            dialog = dialog.set_directory(&dir);
        }
    }

    dialog.pick_file().await.map(|h| h.path().to_path_buf())
}
