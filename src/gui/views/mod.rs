//! GUI views

pub mod ball_view;
pub mod popup_view;

// Re-export for convenience
pub use ball_view::{ball_view, BALL_SIZE};
pub use popup_view::popup_view;
