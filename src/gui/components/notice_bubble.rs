//! Inline notice component

use crate::gui::app::Message;
use iced::widget::text::Shaping;
use iced::widget::{container, text};
use iced::{Element, Length};

/// Width reserved beside the icon while a notice is up
pub const NOTICE_WIDTH: f32 = 240.0;

/// Create the notice shown next to the icon
pub fn notice_bubble(message: &str) -> Element<'static, Message> {
    use crate::gui::theme;

    container(text(message).size(13).shaping(Shaping::Advanced))
        .padding([6, 10])
        .max_width(NOTICE_WIDTH)
        .width(Length::Shrink)
        .style(iced::theme::Container::Custom(Box::new(theme::NoticeBubble)))
        .into()
}
