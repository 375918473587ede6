/// View layer
///
/// Each submodule renders one part of the window from the session state:
/// - upload.rs: empty/populated upload area for one variant
/// - comparison.rs: side-by-side comparison card
/// - detail.rs: per-variant detailed analysis cards
/// - summary.rs: comparison summary of both variants

pub mod comparison;
pub mod detail;
pub mod summary;
pub mod upload;

use iced::widget::{column, container, horizontal_space, image, row, text};
use iced::{Alignment, Color, ContentFit, Element, Length};

use crate::state::data::VariantImage;
use crate::state::previews::PreviewStore;
use crate::Message;

/// Secondary text colour for labels and hints
pub const MUTED: Color = Color {
    r: 0.55,
    g: 0.57,
    b: 0.62,
    a: 1.0,
};

/// A titled, padded box
pub fn card<'a>(
    title: String,
    title_color: Option<Color>,
    body: impl Into<Element<'a, Message>>,
) -> Element<'a, Message> {
    let mut heading = text(title).size(20);
    if let Some(color) = title_color {
        heading = heading.color(color);
    }

    container(column![heading, body.into()].spacing(16))
        .padding(20)
        .width(Length::Fill)
        .style(container::rounded_box)
        .into()
}

/// Small pill with the image dimensions
pub fn badge<'a>(label: String) -> Element<'a, Message> {
    container(text(label).size(12))
        .padding([2, 8])
        .style(container::rounded_box)
        .into()
}

/// "Label:  value" line used in metadata lists
pub fn info_row<'a>(label: &'a str, value: String) -> Element<'a, Message> {
    row![text(label).size(14).color(MUTED), horizontal_space(), text(value).size(14)]
        .spacing(8)
        .align_y(Alignment::Center)
        .into()
}

/// The variant's image, letterboxed into a box of the given height
pub fn preview<'a>(
    previews: &'a PreviewStore,
    image_data: &'a VariantImage,
    height: f32,
) -> Element<'a, Message> {
    let content: Element<'a, Message> = match previews.handle(image_data.preview) {
        Some(handle) => image(handle.clone())
            .content_fit(ContentFit::Contain)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        None => text("Preview unavailable").color(MUTED).into(),
    };

    container(content)
        .center_x(Length::Fill)
        .center_y(Length::Fixed(height))
        .style(container::rounded_box)
        .into()
}
