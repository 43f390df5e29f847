//! Pointer handling for the floating icon
//!
//! Raw press/release/move input is turned into [`IconAction`]s. Positions
//! passed to the handler are window-local; the controller keeps the window's
//! screen position so it can report drag targets and popup anchors in screen
//! coordinates.

use crate::popup::PointerButton;
use iced::{Point, Vector};

/// Keyboard modifiers that change what a press means
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub ctrl: bool,
    pub shift: bool,
}

impl From<iced::keyboard::Modifiers> for Modifiers {
    fn from(modifiers: iced::keyboard::Modifiers) -> Self {
        Self {
            ctrl: modifiers.control(),
            shift: modifiers.shift(),
        }
    }
}

/// What the icon was asked to do
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IconAction {
    Quit,
    /// Move the icon window to this screen position
    MoveWindow(Point),
    /// Show the popup anchored at this screen position
    OpenPopup(Point),
    AddFromClipboard,
    ChangeSymbol,
    ChangeSaveDirectory,
}

/// Input surface of the floating icon
pub trait PointerHandler {
    fn on_press(&mut self, button: PointerButton, modifiers: Modifiers) -> Option<IconAction>;
    fn on_release(&mut self, button: PointerButton) -> Option<IconAction>;
    fn on_move(&mut self, cursor: Point) -> Option<IconAction>;
}

/// Press/drag/click tracking for the icon window
#[derive(Debug, Clone)]
pub struct IconController {
    window_position: Point,
    cursor: Point,
    press_offset: Option<Vector>,
    is_moving: bool,
}

impl IconController {
    pub fn new(window_position: Point) -> Self {
        Self {
            window_position,
            cursor: Point::ORIGIN,
            press_offset: None,
            is_moving: false,
        }
    }

    /// Record where the window manager actually put the window
    pub fn set_window_position(&mut self, position: Point) {
        self.window_position = position;
    }

    pub fn window_position(&self) -> Point {
        self.window_position
    }

    pub fn is_dragging(&self) -> bool {
        self.press_offset.is_some() && self.is_moving
    }

    fn screen_cursor(&self) -> Point {
        self.window_position + Vector::new(self.cursor.x, self.cursor.y)
    }
}

impl PointerHandler for IconController {
    fn on_press(&mut self, button: PointerButton, modifiers: Modifiers) -> Option<IconAction> {
        match button {
            PointerButton::Primary if modifiers.ctrl => Some(IconAction::Quit),
            PointerButton::Primary => {
                self.is_moving = false;
                self.press_offset = Some(Vector::new(self.cursor.x, self.cursor.y));
                None
            }
            PointerButton::Secondary if modifiers.ctrl => Some(IconAction::ChangeSaveDirectory),
            PointerButton::Secondary if modifiers.shift => Some(IconAction::ChangeSymbol),
            PointerButton::Secondary => Some(IconAction::AddFromClipboard),
            PointerButton::Other => None,
        }
    }

    fn on_release(&mut self, button: PointerButton) -> Option<IconAction> {
        if button != PointerButton::Primary {
            return None;
        }
        let pressed = self.press_offset.take().is_some();
        let moved = std::mem::replace(&mut self.is_moving, false);
        if pressed && !moved {
            Some(IconAction::OpenPopup(self.screen_cursor()))
        } else {
            None
        }
    }

    fn on_move(&mut self, cursor: Point) -> Option<IconAction> {
        self.cursor = cursor;
        let offset = self.press_offset?;

        let target = self.screen_cursor() - offset;
        if target == self.window_position {
            return None;
        }
        self.is_moving = true;
        self.window_position = target;
        Some(IconAction::MoveWindow(target))
    }
}
