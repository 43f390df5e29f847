//! Main GUI application

use crate::app::ApplicationState;
use crate::gui::bounce::Bounce;
use crate::gui::clipboard;
use crate::gui::components::NOTICE_WIDTH;
use crate::gui::pointer::{IconAction, IconController, Modifiers, PointerHandler};
use crate::gui::theme;
use crate::gui::views::{ball_view, popup_view, BALL_SIZE};
use crate::popup::{SelectionPopup, UserAction};
use crate::utils::error::{FloatballError, Result};
use iced::{
    event, keyboard, mouse, window, Application, Command, Element, Event, Point, Size,
    Subscription, Theme, Vector,
};
use std::time::{Duration, Instant};
use tracing::{debug, error, info, warn};

/// How long a notice stays next to the icon
pub const NOTICE_DURATION: Duration = Duration::from_secs(2);

/// Where the icon first appears on screen
pub const START_POSITION: Point = Point { x: 100.0, y: 100.0 };

/// Gap between the icon and its notice
const NOTICE_GAP: f32 = 6.0;

/// Main application state
pub struct FloatballApp {
    // Core components
    state: ApplicationState,
    controller: IconController,

    // UI State
    mode: Mode,
    ball_position: Point,
    modifiers: Modifiers,
    notice: Option<Notice>,
    bounce: Option<Bounce>,
}

/// What the single window currently shows
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Mode {
    Ball,
    Popup { anchor: Point },
}

#[derive(Debug, Clone)]
struct Notice {
    text: String,
    shown_at: Instant,
}

/// Application messages
#[derive(Debug, Clone)]
pub enum Message {
    // Raw input
    CursorMoved(Point),
    ButtonPressed(mouse::Button),
    ButtonReleased(mouse::Button),
    ModifiersChanged(keyboard::Modifiers),

    // Window events
    WindowMoved(Point),
    WindowUnfocused,

    // Popup
    Popup(UserAction),

    // System
    Tick(Instant), // Bounce frames and notice expiry
}

impl Application for FloatballApp {
    type Executor = iced::executor::Default;
    type Message = Message;
    type Theme = Theme;
    type Flags = ApplicationState;

    fn new(mut state: ApplicationState) -> (Self, Command<Message>) {
        let startup_notices = state.take_startup_notices();

        let mut app = Self {
            state,
            controller: IconController::new(START_POSITION),
            mode: Mode::Ball,
            ball_position: START_POSITION,
            modifiers: Modifiers::default(),
            notice: None,
            bounce: None,
        };

        let command = if startup_notices.is_empty() {
            Command::none()
        } else {
            app.show_notice(startup_notices.join("; "))
        };

        (app, command)
    }

    fn title(&self) -> String {
        String::from("Floatball")
    }

    fn update(&mut self, message: Message) -> Command<Message> {
        match message {
            Message::CursorMoved(position) => {
                if self.mode != Mode::Ball {
                    return Command::none();
                }
                match self.controller.on_move(position) {
                    Some(action) => self.perform(action),
                    None => Command::none(),
                }
            }

            Message::ButtonPressed(button) => match self.mode {
                Mode::Ball => match self.controller.on_press(button.into(), self.modifiers) {
                    Some(action) => self.perform(action),
                    None => Command::none(),
                },
                // Nothing under the pointer captured the press
                Mode::Popup { .. } => {
                    match SelectionPopup::open(self.state.items()).resolve(None, button.into()) {
                        Some(action) => self.handle_popup(action),
                        None => Command::none(),
                    }
                }
            },

            Message::ButtonReleased(button) => {
                if self.mode != Mode::Ball {
                    return Command::none();
                }
                match self.controller.on_release(button.into()) {
                    Some(action) => self.perform(action),
                    None => Command::none(),
                }
            }

            Message::ModifiersChanged(modifiers) => {
                self.modifiers = modifiers.into();
                Command::none()
            }

            Message::WindowMoved(position) => {
                // Our own bounce and drag moves are already tracked
                if self.mode == Mode::Ball
                    && self.bounce.is_none()
                    && !self.controller.is_dragging()
                {
                    self.ball_position = position;
                    self.controller.set_window_position(position);
                }
                Command::none()
            }

            Message::WindowUnfocused => match self.mode {
                Mode::Popup { .. } => self.handle_popup(UserAction::Dismiss),
                Mode::Ball => Command::none(),
            },

            Message::Popup(action) => self.handle_popup(action),

            Message::Tick(now) => self.tick(now),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        match self.mode {
            Mode::Ball => ball_view(
                self.state.symbol(),
                self.notice.as_ref().map(|notice| notice.text.as_str()),
            ),
            Mode::Popup { .. } => popup_view(SelectionPopup::open(self.state.items())),
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        let input = event::listen_with(map_event);

        let tick = if self.bounce.is_some() {
            iced::time::every(Duration::from_millis(16)).map(Message::Tick)
        } else if self.notice.is_some() {
            iced::time::every(Duration::from_millis(200)).map(Message::Tick)
        } else {
            Subscription::none()
        };

        Subscription::batch([input, tick])
    }

    fn theme(&self) -> Self::Theme {
        Theme::Light
    }

    fn style(&self) -> iced::theme::Application {
        iced::theme::Application::Custom(Box::new(theme::TransparentBackground))
    }
}

impl FloatballApp {
    /// Carry out what the icon controller decided
    fn perform(&mut self, action: IconAction) -> Command<Message> {
        debug!("Icon action: {:?}", action);
        match action {
            IconAction::Quit => {
                info!("Quit requested from the icon");
                window::close(window::Id::MAIN)
            }

            IconAction::MoveWindow(position) => {
                self.ball_position = position;
                window::move_to(window::Id::MAIN, position)
            }

            IconAction::OpenPopup(anchor) => self.open_popup(anchor),

            IconAction::AddFromClipboard => {
                let result =
                    clipboard::get_clipboard_text().and_then(|text| self.state.capture(&text));
                if result.is_ok() {
                    info!("Saved snippet #{}", self.state.items().len());
                }
                self.finish(result)
            }

            IconAction::ChangeSymbol => {
                let result =
                    clipboard::get_clipboard_text().and_then(|text| self.state.set_symbol(&text));
                self.finish(result)
            }

            IconAction::ChangeSaveDirectory => {
                let result = clipboard::get_clipboard_text()
                    .and_then(|text| self.state.set_save_directory(&text));
                self.finish(result)
            }
        }
    }

    fn handle_popup(&mut self, action: UserAction) -> Command<Message> {
        debug!("Popup action: {:?}", action);
        match action {
            UserAction::Select(position) => {
                let copied = self
                    .state
                    .select(position)
                    .and_then(clipboard::set_clipboard_text);
                let succeeded = copied.is_ok();
                if let Err(e) = copied {
                    self.report(e);
                }

                let command = self.close_popup();
                if succeeded {
                    info!("Copied snippet {} to clipboard", position);
                    self.start_bounce();
                }
                command
            }

            UserAction::Delete(position) => match self.state.delete(position) {
                Ok(_) => {
                    info!("Deleted snippet {}", position);
                    let size = SelectionPopup::open(self.state.items()).size();
                    window::resize(window::Id::MAIN, size)
                }
                Err(e) => {
                    self.report(e);
                    Command::none()
                }
            },

            UserAction::Dismiss => self.close_popup(),
        }
    }

    fn open_popup(&mut self, anchor: Point) -> Command<Message> {
        let size = SelectionPopup::open(self.state.items()).size();
        debug!("Opening popup at {:?} with size {:?}", anchor, size);

        self.mode = Mode::Popup { anchor };
        self.bounce = None;

        Command::batch([
            window::resize(window::Id::MAIN, size),
            window::move_to(window::Id::MAIN, anchor),
            window::gain_focus(window::Id::MAIN),
        ])
    }

    fn close_popup(&mut self) -> Command<Message> {
        let Mode::Popup { anchor } = self.mode else {
            return Command::none();
        };
        debug!("Closing popup opened at {:?}", anchor);
        self.mode = Mode::Ball;

        Command::batch([
            window::resize(window::Id::MAIN, self.ball_window_size()),
            window::move_to(window::Id::MAIN, self.ball_position),
        ])
    }

    fn finish(&mut self, result: Result<()>) -> Command<Message> {
        match result {
            Ok(()) => {
                self.start_bounce();
                Command::none()
            }
            Err(e) => self.report(e),
        }
    }

    /// Log an error and surface it as a notice
    fn report(&mut self, err: FloatballError) -> Command<Message> {
        match &err {
            FloatballError::IoError(_)
            | FloatballError::SerializationError(_)
            | FloatballError::Clipboard(_) => error!("{}", err),
            _ => warn!("{}", err),
        }
        self.show_notice(err.notice_text())
    }

    fn show_notice(&mut self, text: String) -> Command<Message> {
        self.notice = Some(Notice {
            text,
            shown_at: Instant::now(),
        });
        match self.mode {
            Mode::Ball => window::resize(window::Id::MAIN, self.ball_window_size()),
            Mode::Popup { .. } => Command::none(),
        }
    }

    fn start_bounce(&mut self) {
        if self.mode == Mode::Ball {
            self.bounce = Some(Bounce::start(Instant::now()));
        }
    }

    fn tick(&mut self, now: Instant) -> Command<Message> {
        let mut commands = Vec::new();

        if let Some(bounce) = self.bounce {
            if self.mode != Mode::Ball {
                self.bounce = None;
            } else if bounce.is_finished(now) {
                self.bounce = None;
                commands.push(window::move_to(window::Id::MAIN, self.ball_position));
            } else {
                let lifted = self.ball_position + Vector::new(0.0, bounce.offset(now));
                commands.push(window::move_to(window::Id::MAIN, lifted));
            }
        }

        let expired = self
            .notice
            .as_ref()
            .map_or(false, |notice| now.duration_since(notice.shown_at) >= NOTICE_DURATION);
        if expired {
            self.notice = None;
            if self.mode == Mode::Ball {
                commands.push(window::resize(window::Id::MAIN, self.ball_window_size()));
            }
        }

        Command::batch(commands)
    }

    fn ball_window_size(&self) -> Size {
        if self.notice.is_some() {
            Size::new(BALL_SIZE + NOTICE_GAP + NOTICE_WIDTH, BALL_SIZE)
        } else {
            Size::new(BALL_SIZE, BALL_SIZE)
        }
    }
}

/// Window settings for the floating icon
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: Size::new(BALL_SIZE, BALL_SIZE),
        position: window::Position::Specific(START_POSITION),
        resizable: false,
        decorations: false,
        transparent: true,
        level: window::Level::AlwaysOnTop,
        ..Default::default()
    }
}

fn map_event(event: Event, status: event::Status) -> Option<Message> {
    match event {
        Event::Mouse(mouse::Event::CursorMoved { position }) => Some(Message::CursorMoved(position)),
        Event::Mouse(mouse::Event::ButtonPressed(button)) if status == event::Status::Ignored => {
            Some(Message::ButtonPressed(button))
        }
        Event::Mouse(mouse::Event::ButtonReleased(button)) => Some(Message::ButtonReleased(button)),
        Event::Keyboard(keyboard::Event::ModifiersChanged(modifiers)) => {
            Some(Message::ModifiersChanged(modifiers))
        }
        Event::Window(_, window::Event::Moved { x, y }) => {
            Some(Message::WindowMoved(Point::new(x as f32, y as f32)))
        }
        Event::Window(_, window::Event::Unfocused) => Some(Message::WindowUnfocused),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_captured_presses_are_not_forwarded() {
        let press = Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left));
        assert!(map_event(press.clone(), event::Status::Captured).is_none());
        assert!(matches!(
            map_event(press, event::Status::Ignored),
            Some(Message::ButtonPressed(mouse::Button::Left))
        ));
    }

    #[test]
    fn test_window_events_mapped() {
        let moved = Event::Window(window::Id::MAIN, window::Event::Moved { x: 12, y: -4 });
        match map_event(moved, event::Status::Ignored) {
            Some(Message::WindowMoved(point)) => assert_eq!(point, Point::new(12.0, -4.0)),
            other => panic!("unexpected {:?}", other),
        }
        let unfocused = Event::Window(window::Id::MAIN, window::Event::Unfocused);
        assert!(matches!(
            map_event(unfocused, event::Status::Ignored),
            Some(Message::WindowUnfocused)
        ));
    }

    #[test]
    fn test_window_settings_float_on_top() {
        let settings = window_settings();
        assert_eq!(settings.size, Size::new(BALL_SIZE, BALL_SIZE));
        assert!(!settings.decorations);
        assert!(settings.transparent);
        assert_eq!(settings.level, window::Level::AlwaysOnTop);
    }
}
