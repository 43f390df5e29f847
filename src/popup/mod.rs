//! Selection popup model
//!
//! The popup borrows the store's item list for one render/interaction and
//! turns pointer presses into [`UserAction`]s. Acting on the result (copying,
//! deleting, closing) is left to the caller.

use iced::Size;

/// Characters of a snippet shown in its label
pub const LABEL_CHARS: usize = 20;

/// Marker appended to truncated labels
pub const ELLIPSIS: &str = "...";

/// Label text size in logical pixels
pub const TEXT_SIZE: f32 = 14.0;

/// Advance of the widest display glyph; full-width CJK such as '中' is one em
const SAMPLE_GLYPH_ADVANCE: f32 = TEXT_SIZE;

/// Horizontal space around the label column
pub const WIDTH_MARGIN: f32 = 40.0;

/// Height of every entry row
pub const ENTRY_HEIGHT: f32 = 30.0;

/// Rows visible before the list scrolls
pub const MAX_VISIBLE_ROWS: usize = 10;

/// Padding inside the popup frame
pub const FRAME_PADDING: f32 = 5.0;

/// Pointer buttons the widget distinguishes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
    Other,
}

impl From<iced::mouse::Button> for PointerButton {
    fn from(button: iced::mouse::Button) -> Self {
        match button {
            iced::mouse::Button::Left => PointerButton::Primary,
            iced::mouse::Button::Right => PointerButton::Secondary,
            _ => PointerButton::Other,
        }
    }
}

/// What a press inside the popup asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserAction {
    /// Copy entry `i` to the clipboard and close
    Select(usize),
    /// Remove entry `i` from the store and stay open
    Delete(usize),
    /// Close without touching anything
    Dismiss,
}

/// One row of the popup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PopupEntry<'a> {
    pub position: usize,
    pub label: &'a str,
    pub full_text: &'a str,
    pub truncated: bool,
}

impl PopupEntry<'_> {
    /// Label as rendered, with the ellipsis marker when cut
    pub fn display(&self) -> String {
        if self.truncated {
            format!("{}{}", self.label, ELLIPSIS)
        } else {
            self.label.to_string()
        }
    }
}

/// Label for `text`: its first 20 characters, plus `...` if anything was cut.
pub fn display_label(text: &str) -> String {
    let (label, truncated) = split_label(text);
    if truncated {
        format!("{}{}", label, ELLIPSIS)
    } else {
        label.to_string()
    }
}

fn split_label(text: &str) -> (&str, bool) {
    match text.char_indices().nth(LABEL_CHARS) {
        Some((cut, _)) => (&text[..cut], true),
        None => (text, false),
    }
}

/// Transient list over the store's snippets
#[derive(Debug, Clone, Copy)]
pub struct SelectionPopup<'a> {
    items: &'a [String],
}

impl<'a> SelectionPopup<'a> {
    /// Open over `items`, listed in insertion order
    pub fn open(items: &'a [String]) -> Self {
        Self { items }
    }

    pub fn entries(&self) -> impl Iterator<Item = PopupEntry<'a>> + 'a {
        let items: &'a [String] = self.items;
        items.iter().enumerate().map(|(position, text)| {
            let (label, truncated) = split_label(text);
            PopupEntry {
                position,
                label,
                full_text: text.as_str(),
                truncated,
            }
        })
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Full text behind entry `position`
    pub fn payload(&self, position: usize) -> Option<&'a str> {
        self.items.get(position).map(String::as_str)
    }

    /// Translate a press into an action.
    ///
    /// `target` is the entry under the pointer, `None` for the background.
    /// Buttons other than primary/secondary do nothing anywhere, since the
    /// window cannot tell which entry a middle press landed on.
    pub fn resolve(&self, target: Option<usize>, button: PointerButton) -> Option<UserAction> {
        if button == PointerButton::Other {
            return None;
        }
        match target {
            Some(position) if position < self.items.len() => match button {
                PointerButton::Primary => Some(UserAction::Select(position)),
                _ => Some(UserAction::Delete(position)),
            },
            _ => Some(UserAction::Dismiss),
        }
    }

    /// Window size for the current entries
    pub fn size(&self) -> Size {
        Size::new(popup_width(), popup_height(self.items.len()))
    }
}

/// Fixed width: a 20-glyph sample of the display alphabet plus margin
pub fn popup_width() -> f32 {
    sample_width(LABEL_CHARS) + WIDTH_MARGIN
}

/// Height for `rows` entries, capped at the visible maximum
pub fn popup_height(rows: usize) -> f32 {
    let visible = rows.clamp(1, MAX_VISIBLE_ROWS);
    visible as f32 * ENTRY_HEIGHT + 2.0 * FRAME_PADDING
}

fn sample_width(glyphs: usize) -> f32 {
    SAMPLE_GLYPH_ADVANCE * glyphs as f32
}
