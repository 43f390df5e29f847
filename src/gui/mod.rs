//! GUI module

pub mod app;
pub mod bounce;
pub mod clipboard;
pub mod components;
pub mod pointer;
pub mod theme;
pub mod views;

// Re-export for convenience
pub use app::{window_settings, FloatballApp, Message, Mode};
pub use pointer::{IconAction, IconController, Modifiers, PointerHandler};
