//! Snippet storage module

pub mod persist;
pub mod snippets;

// Re-export for convenience
pub use persist::{load_snippets, save_snippets};
pub use snippets::{ClipboardStore, SnippetSet, SNIPPET_FILE_NAME};
