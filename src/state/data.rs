/// Shared data structures for the application state
///
/// These structs represent the data model that flows between
/// the loader, the session and the UI layer.

use std::fmt;
use std::path::PathBuf;

use iced::Color;

use super::previews::PreviewId;

/// One of the two compared images
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    A,
    B,
}

impl Variant {
    /// Both variants, in display order
    pub const ALL: [Variant; 2] = [Variant::A, Variant::B];

    /// Heading colour used for this variant throughout the UI
    pub fn accent(self) -> Color {
        match self {
            Variant::A => Color::from_rgb8(0xDC, 0x26, 0x26),
            Variant::B => Color::from_rgb8(0x16, 0xA3, 0x4A),
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Variant::A => f.write_str("A"),
            Variant::B => f.write_str("B"),
        }
    }
}

/// Pixel dimensions of a decoded image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Width divided by height; 0.0 for a degenerate zero-height image
    pub fn aspect_ratio(&self) -> f64 {
        if self.height == 0 {
            return 0.0;
        }
        f64::from(self.width) / f64::from(self.height)
    }

    pub fn pixel_count(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} × {}", self.width, self.height)
    }
}

/// Metadata of the file a variant was loaded from
#[derive(Debug, Clone, PartialEq)]
pub struct SourceFile {
    /// Filename only (e.g., "hero-banner.png")
    pub name: String,
    /// Full path on disk
    pub path: PathBuf,
    /// Size in bytes
    pub size: u64,
    /// MIME type derived from the extension (e.g., "image/png")
    pub mime: String,
}

/// A variant that has been probed and committed into its slot
#[derive(Debug, Clone, PartialEq)]
pub struct VariantImage {
    pub file: SourceFile,
    /// Display handle, valid only while this image is held by the session
    pub preview: PreviewId,
    pub dimensions: Dimensions,
}

/// Which rendering of the two slots is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Comparison,
    Detailed,
}
