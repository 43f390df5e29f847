//! Custom theme definitions for the widget - Light Theme

use iced::widget::{container, scrollable};
use iced::{application, Background, Border, Color, Shadow, Theme, Vector};

// --- Light Color Palette ---

// Accent - the selected-row blue
pub const BLUE_500: Color = Color::from_rgb(0.094, 0.565, 1.0); // #1890ff
pub const BLUE_50: Color = Color::from_rgb(0.902, 0.969, 1.0); // #e6f7ff

// Gray scale for text and borders
pub const GRAY_800: Color = Color::from_rgb(0.2, 0.2, 0.2); // #333333 entry text
pub const GRAY_500: Color = Color::from_rgb(0.420, 0.447, 0.502); // Placeholder text
pub const GRAY_300: Color = Color::from_rgb(0.8, 0.8, 0.8); // #cccccc frame border
pub const GRAY_100: Color = Color::from_rgb(0.941, 0.941, 0.941); // #f0f0f0 row fill

// White with alpha; the whole popup is slightly see-through
pub const WHITE: Color = Color::from_rgb(1.0, 1.0, 1.0);
pub const WHITE_90: Color = Color::from_rgba(1.0, 1.0, 1.0, 0.9);

// Text colors for compatibility
pub const TEXT_PRIMARY: Color = GRAY_800;
pub const TEXT_SECONDARY: Color = GRAY_500;

// --- Application Style ---

/// Clears the window so only the icon glyph is visible
pub struct TransparentBackground;

impl application::StyleSheet for TransparentBackground {
    type Style = Theme;

    fn appearance(&self, _style: &Self::Style) -> application::Appearance {
        application::Appearance {
            background_color: Color::TRANSPARENT,
            text_color: TEXT_PRIMARY,
        }
    }
}

// --- Container Styles ---

/// Popup frame: white card, soft gray shadow
pub struct PopupContainer;

impl container::StyleSheet for PopupContainer {
    type Style = Theme;

    fn appearance(&self, _style: &Self::Style) -> container::Appearance {
        container::Appearance {
            text_color: Some(TEXT_PRIMARY),
            background: Some(Background::Color(WHITE_90)),
            border: Border {
                color: GRAY_300,
                width: 1.0,
                radius: 8.0.into(),
            },
            shadow: Shadow {
                color: Color::from_rgba(0.5, 0.5, 0.5, 0.6),
                offset: Vector::new(0.0, 0.0),
                blur_radius: 10.0,
            },
        }
    }
}

/// One snippet row
pub struct SnippetRow;

impl container::StyleSheet for SnippetRow {
    type Style = Theme;

    fn appearance(&self, _style: &Self::Style) -> container::Appearance {
        container::Appearance {
            text_color: Some(TEXT_PRIMARY),
            background: Some(Background::Color(GRAY_100)),
            border: Border {
                radius: 5.0.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

/// Transient notice next to the icon
pub struct NoticeBubble;

impl container::StyleSheet for NoticeBubble {
    type Style = Theme;

    fn appearance(&self, _style: &Self::Style) -> container::Appearance {
        container::Appearance {
            text_color: Some(BLUE_500),
            background: Some(Background::Color(BLUE_50)),
            border: Border {
                color: BLUE_500,
                width: 1.0,
                radius: 6.0.into(),
            },
            shadow: Shadow {
                color: Color::from_rgba(0.0, 0.0, 0.0, 0.1),
                offset: Vector::new(0.0, 1.0),
                blur_radius: 4.0,
            },
        }
    }
}

/// Full-text tooltip over a row
pub struct TooltipContainer;

impl container::StyleSheet for TooltipContainer {
    type Style = Theme;

    fn appearance(&self, _style: &Self::Style) -> container::Appearance {
        container::Appearance {
            text_color: Some(TEXT_PRIMARY),
            background: Some(Background::Color(WHITE)),
            border: Border {
                color: GRAY_300,
                width: 1.0,
                radius: 4.0.into(),
            },
            ..Default::default()
        }
    }
}

// --- Scrollable Styles ---

/// Scrolling stays active but nothing is drawn
pub struct HiddenScrollbar;

impl scrollable::StyleSheet for HiddenScrollbar {
    type Style = Theme;

    fn active(&self, _style: &Self::Style) -> scrollable::Appearance {
        scrollable::Appearance {
            container: container::Appearance::default(),
            scrollbar: scrollable::Scrollbar {
                background: None,
                border: Border::default(),
                scroller: scrollable::Scroller {
                    color: Color::TRANSPARENT,
                    border: Border::default(),
                },
            },
            gap: None,
        }
    }

    fn hovered(
        &self,
        style: &Self::Style,
        _is_mouse_over_scrollbar: bool,
    ) -> scrollable::Appearance {
        self.active(style)
    }
}
