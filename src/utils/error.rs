//! Error handling for Floatball

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for Floatball
#[derive(Debug, Error)]
pub enum FloatballError {
    #[error("Malformed JSON in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Could not read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Refusing to overwrite unreadable {}", .0.display())]
    StoreLocked(PathBuf),

    #[error("Snippet position {position} out of range (list has {len})")]
    IndexOutOfRange { position: usize, len: usize },

    #[error("Not a single symbol character: {0:?}")]
    InvalidSymbol(String),

    #[error("Not an existing directory: {0}")]
    InvalidDirectory(String),

    #[error("Snippet already saved")]
    DuplicateSnippet,

    #[error("Clipboard holds no text")]
    EmptyClipboard,

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("Autostart registration failed: {0}")]
    Autostart(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, FloatballError>;

fn file_label(path: &std::path::Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "File".to_string())
}

impl FloatballError {
    /// Short text for the inline notice next to the icon
    pub fn notice_text(&self) -> String {
        match self {
            FloatballError::Parse { path, .. } => {
                format!("{} was unreadable, started fresh", file_label(path))
            }
            FloatballError::Read { path, .. } => format!("Could not read {}", file_label(path)),
            FloatballError::StoreLocked(path) => {
                format!("{} is unreadable, not saving", file_label(path))
            }
            FloatballError::IndexOutOfRange { .. } => "That snippet is gone".to_string(),
            FloatballError::InvalidSymbol(_) => "Clipboard content is not a symbol".to_string(),
            FloatballError::InvalidDirectory(_) => "Clipboard path is not a folder".to_string(),
            FloatballError::DuplicateSnippet => "Already saved".to_string(),
            FloatballError::EmptyClipboard => "Clipboard has no text".to_string(),
            FloatballError::Clipboard(_) => "Clipboard unavailable".to_string(),
            FloatballError::Autostart(_) => "Autostart not registered".to_string(),
            FloatballError::IoError(_) | FloatballError::SerializationError(_) => {
                "Could not save".to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_text_is_one_line() {
        let errors = [
            FloatballError::DuplicateSnippet,
            FloatballError::EmptyClipboard,
            FloatballError::InvalidSymbol("AB".into()),
            FloatballError::InvalidDirectory("/nope".into()),
            FloatballError::IndexOutOfRange { position: 3, len: 1 },
        ];
        for err in errors {
            let notice = err.notice_text();
            assert!(!notice.is_empty());
            assert!(!notice.contains('\n'));
        }
    }

    #[test]
    fn test_parse_notice_names_file() {
        let source = serde_json::from_str::<Vec<String>>("{").unwrap_err();
        let err = FloatballError::Parse {
            path: PathBuf::from("/tmp/x/options.json"),
            source,
        };
        assert!(err.notice_text().starts_with("options.json"));
        assert!(err.to_string().contains("options.json"));
    }

    #[test]
    fn test_read_failure_is_not_reported_as_save() {
        let err = FloatballError::Read {
            path: PathBuf::from("/tmp/x/options.json"),
            source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        };
        assert_eq!(err.notice_text(), "Could not read options.json");

        let locked = FloatballError::StoreLocked(PathBuf::from("/tmp/x/options.json"));
        assert!(locked.notice_text().starts_with("options.json"));
    }
}
