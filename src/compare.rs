/// Comparison summary between two variants
///
/// Pure formatting and comparison helpers used by the detail cards and the
/// summary panel. Nothing here touches UI state.

use std::cmp::Ordering;
use std::fmt;

use crate::state::data::{Dimensions, VariantImage};

const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];
const UNIT_BASE: u64 = 1024;

/// Aspect ratios closer than this are reported as equal
pub const RATIO_TOLERANCE: f64 = 0.01;

/// Human-readable file size, base 1024, at most two decimals
///
/// Trailing zeros are trimmed, so 1024 is "1 KB" and 1536 is "1.5 KB".
/// Sizes past the last unit stay in GB.
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut unit = 0;
    let mut divisor = 1u64;
    while unit + 1 < UNITS.len() && bytes >= divisor * UNIT_BASE {
        divisor *= UNIT_BASE;
        unit += 1;
    }

    let value = bytes as f64 / divisor as f64;
    format!("{} {}", trim_decimals(&format!("{:.2}", value)), UNITS[unit])
}

fn trim_decimals(fixed: &str) -> &str {
    if fixed.contains('.') {
        fixed.trim_end_matches('0').trim_end_matches('.')
    } else {
        fixed
    }
}

/// Aspect ratio as "W/H:1" with two decimals, e.g. "1.78:1"
pub fn format_aspect_ratio(dimensions: &Dimensions) -> String {
    format!("{:.2}:1", dimensions.aspect_ratio())
}

/// Pixel count with comma thousands separators, e.g. "2,073,600"
pub fn format_pixel_count(count: u64) -> String {
    let digits = count.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeComparison {
    /// A is larger by the given number of bytes
    ALarger(u64),
    /// B is larger by the given number of bytes
    BLarger(u64),
    Same,
}

impl SizeComparison {
    pub fn between(a: u64, b: u64) -> Self {
        match a.cmp(&b) {
            Ordering::Greater => SizeComparison::ALarger(a - b),
            Ordering::Less => SizeComparison::BLarger(b - a),
            Ordering::Equal => SizeComparison::Same,
        }
    }
}

impl fmt::Display for SizeComparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SizeComparison::ALarger(delta) => write!(f, "A is {} larger", format_file_size(*delta)),
            SizeComparison::BLarger(delta) => write!(f, "B is {} larger", format_file_size(*delta)),
            SizeComparison::Same => f.write_str("Same size"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DimensionComparison {
    Same,
    Different,
}

impl DimensionComparison {
    pub fn between(a: &Dimensions, b: &Dimensions) -> Self {
        if a == b {
            DimensionComparison::Same
        } else {
            DimensionComparison::Different
        }
    }
}

impl fmt::Display for DimensionComparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DimensionComparison::Same => f.write_str("Same dimensions"),
            DimensionComparison::Different => f.write_str("Different dimensions"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatioComparison {
    Same,
    Different,
}

impl RatioComparison {
    pub fn between(a: &Dimensions, b: &Dimensions) -> Self {
        if (a.aspect_ratio() - b.aspect_ratio()).abs() < RATIO_TOLERANCE {
            RatioComparison::Same
        } else {
            RatioComparison::Different
        }
    }
}

impl fmt::Display for RatioComparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RatioComparison::Same => f.write_str("Same ratio"),
            RatioComparison::Different => f.write_str("Different ratios"),
        }
    }
}

/// Everything the summary panel shows for a pair of loaded variants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub size: SizeComparison,
    pub dimensions: DimensionComparison,
    pub ratio: RatioComparison,
}

impl Summary {
    pub fn between(a: &VariantImage, b: &VariantImage) -> Self {
        Self {
            size: SizeComparison::between(a.file.size, b.file.size),
            dimensions: DimensionComparison::between(&a.dimensions, &b.dimensions),
            ratio: RatioComparison::between(&a.dimensions, &b.dimensions),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_file_size() {
        assert_eq!(format_file_size(0), "0 Bytes");
        assert_eq!(format_file_size(1), "1 Bytes");
        assert_eq!(format_file_size(1023), "1023 Bytes");
        assert_eq!(format_file_size(1024), "1 KB");
        assert_eq!(format_file_size(1536), "1.5 KB");
        assert_eq!(format_file_size(1024 * 1024), "1 MB");
        assert_eq!(format_file_size(5 * 1024 * 1024 * 1024 / 4), "1.25 GB");
    }

    #[test]
    fn test_format_file_size_rounds_to_two_decimals() {
        // 1234 / 1024 = 1.2050...
        assert_eq!(format_file_size(1234), "1.21 KB");
    }

    #[test]
    fn test_format_file_size_stays_in_gb() {
        let tb = 1024u64.pow(4);
        assert_eq!(format_file_size(tb), "1024 GB");
    }

    #[test]
    fn test_format_pixel_count() {
        assert_eq!(format_pixel_count(0), "0");
        assert_eq!(format_pixel_count(999), "999");
        assert_eq!(format_pixel_count(1000), "1,000");
        assert_eq!(format_pixel_count(2_073_600), "2,073,600");
    }

    #[test]
    fn test_format_aspect_ratio() {
        assert_eq!(format_aspect_ratio(&Dimensions::new(1920, 1080)), "1.78:1");
        assert_eq!(format_aspect_ratio(&Dimensions::new(500, 500)), "1.00:1");
    }

    #[test]
    fn test_size_comparison() {
        assert_eq!(SizeComparison::between(2048, 1024).to_string(), "A is 1 KB larger");
        assert_eq!(SizeComparison::between(1024, 2560).to_string(), "B is 1.5 KB larger");
        assert_eq!(SizeComparison::between(10, 10).to_string(), "Same size");
    }

    #[test]
    fn test_dimension_comparison() {
        let a = Dimensions::new(800, 600);
        assert_eq!(
            DimensionComparison::between(&a, &Dimensions::new(800, 600)).to_string(),
            "Same dimensions"
        );
        assert_eq!(
            DimensionComparison::between(&a, &Dimensions::new(801, 600)).to_string(),
            "Different dimensions"
        );
        assert_eq!(
            DimensionComparison::between(&a, &Dimensions::new(800, 599)).to_string(),
            "Different dimensions"
        );
    }

    #[test]
    fn test_ratio_comparison_threshold() {
        // 1.0 vs 1.005
        let square = Dimensions::new(1000, 1000);
        let nearly = Dimensions::new(1005, 1000);
        assert_eq!(RatioComparison::between(&square, &nearly).to_string(), "Same ratio");

        // 1.0 vs 1.02
        let wider = Dimensions::new(1020, 1000);
        assert_eq!(RatioComparison::between(&square, &wider).to_string(), "Different ratios");
    }

    #[test]
    fn test_ratio_same_for_scaled_images() {
        let small = Dimensions::new(160, 90);
        let large = Dimensions::new(1920, 1080);
        assert_eq!(RatioComparison::between(&small, &large), RatioComparison::Same);
        assert_eq!(DimensionComparison::between(&small, &large), DimensionComparison::Different);
    }
}
