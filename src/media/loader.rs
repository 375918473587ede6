/// Variant file loader
///
/// Reads a selected file, probes its pixel dimensions from the image header
/// and wraps the bytes in a display handle.

use std::io::Cursor;
use std::path::{Path, PathBuf};

use iced::widget::image::Handle;
use image::ImageReader;
use tokio::task;

use super::mime;
use crate::error::{Error, Result};
use crate::state::data::{Dimensions, SourceFile};

/// Result of a successful probe, ready to be committed into a slot
#[derive(Debug, Clone)]
pub struct LoadedImage {
    pub file: SourceFile,
    pub dimensions: Dimensions,
    pub handle: Handle,
}

/// Load a variant from disk
///
/// # Returns
/// * `Ok(LoadedImage)` - File metadata, true pixel dimensions and a preview handle
/// * `Err(Error)` - The file could not be read or its header is not a decodable image
pub async fn probe(path: PathBuf) -> Result<LoadedImage> {
    let bytes = tokio::fs::read(&path).await?;

    // Header parsing is CPU work, keep it off the UI executor
    task::spawn_blocking(move || probe_bytes(&path, bytes))
        .await
        .map_err(|e| Error::Io(format!("Task join error: {}", e)))?
}

/// Blocking half of [`probe`], split out so it can run on in-memory data
fn probe_bytes(path: &Path, bytes: Vec<u8>) -> Result<LoadedImage> {
    let (width, height) = ImageReader::new(Cursor::new(bytes.as_slice()))
        .with_guessed_format()?
        .into_dimensions()?;

    let file = SourceFile {
        name: path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string(),
        path: path.to_path_buf(),
        size: bytes.len() as u64,
        mime: mime::mime_for_path(path),
    };

    tracing::debug!(name = %file.name, width, height, "probed image header");

    Ok(LoadedImage {
        file,
        dimensions: Dimensions::new(width, height),
        handle: Handle::from_bytes(bytes),
    })
}
