//! Application state shared by the icon controller and the popup

use crate::store::{persist, ClipboardStore};
use crate::utils::config::AppConfig;
use crate::utils::error::{FloatballError, Result};
use crate::utils::platform;
use crate::utils::symbol::is_symbol;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};

/// Everything the widget owns: config plus the snippet store
#[derive(Debug)]
pub struct ApplicationState {
    config_path: PathBuf,
    config: AppConfig,
    store: ClipboardStore,
    startup_notices: Vec<String>,
}

impl ApplicationState {
    /// Load from the fixed `~/.floating_ball` directory
    pub fn load_default() -> Self {
        Self::load(&platform::app_home_dir())
    }

    /// Load config and snippets rooted at `home`.
    ///
    /// Never fails: unreadable files are preserved as `<name>.corrupt`, the
    /// affected part starts from defaults, and a notice is queued.
    pub fn load(home: &Path) -> Self {
        let config_path = platform::config_file_path(home);
        let mut startup_notices = Vec::new();

        let config = match AppConfig::load(&config_path, home) {
            Ok(config) => config,
            Err(e) => {
                recover(&config_path, &e, &mut startup_notices);
                AppConfig::default_for(home)
            }
        };

        let snippet_path = config.snippet_file();
        let store = match ClipboardStore::open(&snippet_path) {
            Ok(store) => store,
            Err(e) => {
                if recover(&snippet_path, &e, &mut startup_notices) {
                    ClipboardStore::empty(&snippet_path)
                } else {
                    ClipboardStore::locked(&snippet_path)
                }
            }
        };

        info!(
            "State ready: {} snippets, saving to {:?}",
            store.len(),
            config.save_directory
        );

        Self {
            config_path,
            config,
            store,
            startup_notices,
        }
    }

    pub fn items(&self) -> &[String] {
        self.store.items()
    }

    pub fn store(&self) -> &ClipboardStore {
        &self.store
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn symbol(&self) -> &str {
        &self.config.active_symbol
    }

    pub fn save_directory(&self) -> &Path {
        &self.config.save_directory
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Notices raised while loading, drained once by the GUI
    pub fn take_startup_notices(&mut self) -> Vec<String> {
        std::mem::take(&mut self.startup_notices)
    }

    /// Save clipboard text as a new snippet.
    pub fn capture(&mut self, clipboard_text: &str) -> Result<()> {
        if clipboard_text.is_empty() {
            return Err(FloatballError::EmptyClipboard);
        }
        if self.store.add(clipboard_text)? {
            Ok(())
        } else {
            Err(FloatballError::DuplicateSnippet)
        }
    }

    /// Full text of the snippet at `position`, for copying back.
    pub fn select(&self, position: usize) -> Result<&str> {
        self.store
            .get(position)
            .ok_or(FloatballError::IndexOutOfRange {
                position,
                len: self.store.len(),
            })
    }

    /// Remove the snippet at `position`.
    pub fn delete(&mut self, position: usize) -> Result<String> {
        self.store.delete(position)
    }

    /// Change the icon face. Accepts exactly one symbol character.
    pub fn set_symbol(&mut self, candidate: &str) -> Result<()> {
        if !is_symbol(candidate) {
            return Err(FloatballError::InvalidSymbol(candidate.to_string()));
        }
        self.config.active_symbol = candidate.to_string();
        self.config.save(&self.config_path)?;
        info!("Icon symbol set to {}", candidate);
        Ok(())
    }

    /// Move the snippet list to an existing directory.
    ///
    /// The current list is written into the new directory; the config stays
    /// at its fixed location and records the new directory.
    pub fn set_save_directory(&mut self, candidate: &str) -> Result<()> {
        let dir = PathBuf::from(candidate);
        if candidate.is_empty() || !dir.is_dir() {
            return Err(FloatballError::InvalidDirectory(candidate.to_string()));
        }

        let mut next = self.config.clone();
        next.save_directory = dir;

        // Config first; if it cannot be written nothing has moved yet
        next.save(&self.config_path)?;
        if let Err(e) = self.store.relocate(next.snippet_file()) {
            if let Err(restore_err) = self.config.save(&self.config_path) {
                error!("Could not restore {:?}: {}", self.config_path, restore_err);
            }
            return Err(e);
        }
        self.config = next;
        info!("Save directory set to {:?}", self.config.save_directory);
        Ok(())
    }
}

/// Log a load failure, copy the file aside and queue a notice.
///
/// Returns whether the file at `path` is safe to overwrite.
fn recover(path: &Path, err: &FloatballError, notices: &mut Vec<String>) -> bool {
    match err {
        FloatballError::Parse { .. } => warn!("{}", err),
        _ => error!("Failed to read {:?}: {}", path, err),
    }
    notices.push(err.notice_text());

    match persist::preserve_corrupt(path) {
        Ok(_) => true,
        Err(copy_err) => {
            error!("Could not preserve {:?}: {}", path, copy_err);
            !path.exists()
        }
    }
}
