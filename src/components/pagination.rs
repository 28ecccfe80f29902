use cosmic::iced::Length;
use cosmic::widget::{container, row, text};
use cosmic::Element;

use crate::message::Message;

/// One dot per slide, filled for the settled slide.
pub fn pagination<'a>(dots: &[bool]) -> Element<'a, Message> {
    let mut dots_row = row().spacing(10);
    for &active in dots {
        dots_row = dots_row.push(text::body(if active { "●" } else { "○" }));
    }
    container(dots_row).center_x(Length::Fill).into()
}
