use iced::widget::{button, column, container, horizontal_space, row, text};
use iced::{Alignment, Element, Length};

use super::{badge, info_row, preview, MUTED};
use crate::compare::format_file_size;
use crate::state::data::Variant;
use crate::state::session::Session;
use crate::Message;

const DROP_ZONE_HEIGHT: f32 = 256.0;

/// Upload area for one variant: a click-to-upload zone when empty, or the
/// loaded image with its metadata and a Replace button.
pub fn view(session: &Session, variant: Variant) -> Element<'_, Message> {
    let image_data = session.image(variant);

    let mut header = row![text(format!("Variant {}", variant)).size(18), horizontal_space()]
        .align_y(Alignment::Center);
    if let Some(data) = image_data {
        header = header.push(badge(data.dimensions.to_string()));
    }

    let body: Element<'_, Message> = match image_data {
        None => drop_zone(session, variant),
        Some(data) => column![
            preview(session.previews(), data, DROP_ZONE_HEIGHT),
            info_row("File name:", data.file.name.clone()),
            info_row("File size:", format_file_size(data.file.size)),
            info_row("Dimensions:", data.dimensions.to_string()),
            replace_button(variant),
        ]
        .spacing(8)
        .into(),
    };

    column![header, body].spacing(12).width(Length::Fill).into()
}

/// Full-width button that re-opens the picker for `variant`
pub fn replace_button<'a>(variant: Variant) -> Element<'a, Message> {
    button(container(text("Replace Image").size(14)).center_x(Length::Fill))
        .width(Length::Fill)
        .style(button::secondary)
        .on_press(Message::PickFile(variant))
        .into()
}

fn drop_zone(session: &Session, variant: Variant) -> Element<'_, Message> {
    let loading = session.is_loading(variant);

    let prompt = (if loading {
        column![text("Loading...").size(14).color(MUTED)]
    } else {
        column![
            text("+").size(32).color(MUTED),
            text(format!("Click to upload Variant {}", variant)).size(14),
            text("PNG, JPG, GIF up to 10MB").size(12).color(MUTED),
        ]
    })
    .spacing(8)
    .align_x(Alignment::Center);

    button(
        container(prompt)
            .center_x(Length::Fill)
            .center_y(Length::Fill),
    )
    .width(Length::Fill)
    .height(Length::Fixed(DROP_ZONE_HEIGHT))
    .style(button::secondary)
    .on_press_maybe((!loading).then_some(Message::PickFile(variant)))
    .into()
}
