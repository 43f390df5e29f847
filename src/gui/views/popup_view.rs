//! Snippet popup view

use crate::gui::app::Message;
use crate::gui::components::snippet_item;
use crate::popup::{SelectionPopup, UserAction, FRAME_PADDING, TEXT_SIZE};
use iced::widget::{column, container, mouse_area, scrollable, text, Column};
use iced::{Element, Length};

/// Create the popup list. Presses that miss every row dismiss it.
pub fn popup_view(popup: SelectionPopup<'_>) -> Element<'static, Message> {
    use crate::gui::theme;

    let body: Element<'static, Message> = if popup.is_empty() {
        container(
            text("No snippets yet")
                .size(TEXT_SIZE)
                .style(theme::TEXT_SECONDARY),
        )
        .width(Length::Fill)
        .center_x()
        .padding(6)
        .into()
    } else {
        let rows = Column::with_children(popup.entries().map(snippet_item).collect::<Vec<_>>())
            .spacing(2)
            .width(Length::Fill);

        scrollable(rows)
            .direction(scrollable::Direction::Vertical(
                scrollable::Properties::new().width(0.0).scroller_width(0.0),
            ))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(iced::theme::Scrollable::Custom(Box::new(
                theme::HiddenScrollbar,
            )))
            .into()
    };

    let frame = container(column![body])
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(FRAME_PADDING)
        .style(iced::theme::Container::Custom(Box::new(
            theme::PopupContainer,
        )));

    mouse_area(frame)
        .on_press(Message::Popup(UserAction::Dismiss))
        .on_right_press(Message::Popup(UserAction::Dismiss))
        .into()
}
