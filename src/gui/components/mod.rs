//! GUI components

pub mod notice_bubble;
pub mod snippet_item;

// Re-export for convenience
pub use notice_bubble::{notice_bubble, NOTICE_WIDTH};
pub use snippet_item::snippet_item;
