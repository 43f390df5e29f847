//! Floatball library

pub mod app;
pub mod gui;
pub mod popup;
pub mod store;
pub mod utils;

// Re-export main types for easier use
pub use app::ApplicationState;
pub use gui::{FloatballApp, Message};
pub use popup::{display_label, PointerButton, SelectionPopup, UserAction};
pub use store::{ClipboardStore, SnippetSet};
pub use utils::{AppConfig, FloatballError};
