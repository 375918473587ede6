use iced::widget::{column, row, text};
use iced::{Alignment, Element, Length};

use super::{card, MUTED};
use crate::compare::{format_aspect_ratio, format_file_size, Summary};
use crate::state::data::{Variant, VariantImage};
use crate::Message;

/// Summary card with size, dimension and ratio comparisons
pub fn view<'a>(a: &'a VariantImage, b: &'a VariantImage) -> Element<'a, Message> {
    let summary = Summary::between(a, b);

    let columns = row![
        summary_column(
            "File Size Comparison",
            format_file_size(a.file.size),
            format_file_size(b.file.size),
            summary.size.to_string(),
        ),
        summary_column(
            "Dimensions",
            a.dimensions.to_string(),
            b.dimensions.to_string(),
            summary.dimensions.to_string(),
        ),
        summary_column(
            "Aspect Ratio",
            format_aspect_ratio(&a.dimensions),
            format_aspect_ratio(&b.dimensions),
            summary.ratio.to_string(),
        ),
    ]
    .spacing(24);

    card("Comparison Summary".to_string(), None, columns)
}

fn summary_column<'a>(
    heading: &'a str,
    value_a: String,
    value_b: String,
    verdict: String,
) -> Element<'a, Message> {
    column![
        text(heading).size(16),
        text(format!("A: {}", value_a)).size(14).color(Variant::A.accent()),
        text(format!("B: {}", value_b)).size(14).color(Variant::B.accent()),
        text(verdict).size(12).color(MUTED),
    ]
    .spacing(4)
    .align_x(Alignment::Center)
    .width(Length::FillPortion(1))
    .into()
}
