//! Floating icon view

use crate::gui::app::Message;
use crate::gui::components::notice_bubble;
use iced::widget::text::Shaping;
use iced::widget::{container, row, text};
use iced::{Alignment, Element, Length};

/// Side of the square icon window
pub const BALL_SIZE: f32 = 50.0;

/// Create the icon, with the current notice beside it
pub fn ball_view(symbol: &str, notice: Option<&str>) -> Element<'static, Message> {
    let ball = container(text(symbol).size(36).shaping(Shaping::Advanced))
        .width(Length::Fixed(BALL_SIZE))
        .height(Length::Fixed(BALL_SIZE))
        .center_x()
        .center_y();

    match notice {
        Some(message) => row![ball, notice_bubble(message)]
            .spacing(6)
            .align_items(Alignment::Center)
            .into(),
        None => ball.into(),
    }
}
