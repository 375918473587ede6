use iced::widget::{column, horizontal_space, row, text, Row};
use iced::{Alignment, Element, Length};

use super::{badge, card, preview, upload};
use crate::state::data::Variant;
use crate::state::session::Session;
use crate::Message;

const PREVIEW_HEIGHT: f32 = 384.0;

/// Side-by-side comparison card
pub fn view(session: &Session) -> Element<'_, Message> {
    let columns = Variant::ALL
        .into_iter()
        .fold(Row::new().spacing(24), |row, variant| {
            row.push(variant_column(session, variant))
        });

    card("Side-by-Side Comparison".to_string(), None, columns)
}

fn variant_column(session: &Session, variant: Variant) -> Element<'_, Message> {
    match session.image(variant) {
        Some(data) => {
            let header = row![
                text(format!("Variant {}", variant)).size(18).color(variant.accent()),
                horizontal_space(),
                badge(data.dimensions.to_string()),
            ]
            .align_y(Alignment::Center);

            column![
                header,
                preview(session.previews(), data, PREVIEW_HEIGHT),
                upload::replace_button(variant),
            ]
            .spacing(12)
            .width(Length::Fill)
            .into()
        }
        None => upload::view(session, variant),
    }
}
