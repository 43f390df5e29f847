//! Snippet row component

use crate::gui::app::Message;
use crate::popup::{PopupEntry, UserAction, ENTRY_HEIGHT, TEXT_SIZE};
use iced::widget::text::Shaping;
use iced::widget::{container, mouse_area, text, tooltip};
use iced::{alignment, Element, Length};

/// Create one clickable row: left press selects, right press deletes
pub fn snippet_item(entry: PopupEntry<'_>) -> Element<'static, Message> {
    use crate::gui::theme;

    let label = container(
        text(entry.display())
            .size(TEXT_SIZE)
            .shaping(Shaping::Advanced)
            .style(theme::TEXT_PRIMARY),
    )
    .width(Length::Fill)
    .height(Length::Fixed(ENTRY_HEIGHT - 2.0))
    .padding([4, 8])
    .align_y(alignment::Vertical::Center)
    .style(iced::theme::Container::Custom(Box::new(theme::SnippetRow)));

    let row = mouse_area(label)
        .on_press(Message::Popup(UserAction::Select(entry.position)))
        .on_right_press(Message::Popup(UserAction::Delete(entry.position)));

    tooltip(
        row,
        container(
            text(entry.full_text)
                .size(TEXT_SIZE - 2.0)
                .shaping(Shaping::Advanced),
        )
        .padding(6)
        .style(iced::theme::Container::Custom(Box::new(
            theme::TooltipContainer,
        ))),
        tooltip::Position::Bottom,
    )
    .into()
}
