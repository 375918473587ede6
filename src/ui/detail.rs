use iced::widget::{column, container, horizontal_rule, text, Row};
use iced::{Element, Length};

use super::{card, info_row, preview, upload};
use crate::compare::{format_aspect_ratio, format_file_size, format_pixel_count};
use crate::state::data::Variant;
use crate::state::session::Session;
use crate::Message;

const PREVIEW_HEIGHT: f32 = 256.0;

/// One "Detailed Analysis" card per variant
pub fn view(session: &Session) -> Element<'_, Message> {
    Variant::ALL
        .into_iter()
        .fold(Row::new().spacing(24), |row, variant| {
            row.push(container(variant_card(session, variant)).width(Length::FillPortion(1)))
        })
        .into()
}

fn variant_card(session: &Session, variant: Variant) -> Element<'_, Message> {
    let title = format!("Variant {} - Detailed Analysis", variant);

    let body: Element<'_, Message> = match session.image(variant) {
        Some(data) => {
            let file_info = column![
                text("File Information").size(16),
                info_row("Name:", data.file.name.clone()),
                info_row("Size:", format_file_size(data.file.size)),
                info_row("Type:", data.file.mime.clone()),
            ]
            .spacing(8);

            let properties = column![
                text("Image Properties").size(16),
                info_row("Dimensions:", data.dimensions.to_string()),
                info_row("Aspect Ratio:", format_aspect_ratio(&data.dimensions)),
                info_row("Total Pixels:", format_pixel_count(data.dimensions.pixel_count())),
            ]
            .spacing(8);

            column![
                preview(session.previews(), data, PREVIEW_HEIGHT),
                file_info,
                horizontal_rule(1),
                properties,
                upload::replace_button(variant),
            ]
            .spacing(16)
            .into()
        }
        None => upload::view(session, variant),
    };

    card(title, Some(variant.accent()), body)
}
