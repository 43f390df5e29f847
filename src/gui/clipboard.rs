//! Clipboard functionality

use crate::utils::error::{FloatballError, Result};
use arboard::Clipboard;

/// Get clipboard text. An empty or non-text clipboard is `EmptyClipboard`.
pub fn get_clipboard_text() -> Result<String> {
    let mut clipboard = Clipboard::new()
        .map_err(|e| FloatballError::Clipboard(format!("Failed to access clipboard: {}", e)))?;

    match clipboard.get_text() {
        Ok(text) if text.is_empty() => Err(FloatballError::EmptyClipboard),
        Ok(text) => Ok(text),
        Err(arboard::Error::ContentNotAvailable) => Err(FloatballError::EmptyClipboard),
        Err(e) => Err(FloatballError::Clipboard(format!(
            "Failed to read clipboard: {}",
            e
        ))),
    }
}

/// Set clipboard text
pub fn set_clipboard_text(text: &str) -> Result<()> {
    let mut clipboard = Clipboard::new()
        .map_err(|e| FloatballError::Clipboard(format!("Failed to access clipboard: {}", e)))?;

    clipboard
        .set_text(text)
        .map_err(|e| FloatballError::Clipboard(format!("Failed to write clipboard: {}", e)))
}
