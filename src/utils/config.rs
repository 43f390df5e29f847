//! Application configuration

use crate::store::persist;
use crate::store::SNIPPET_FILE_NAME;
use crate::utils::symbol::{is_symbol, DEFAULT_SYMBOL};
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Application settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppConfig {
    /// Directory holding `options.json`
    #[serde(rename = "save_dir")]
    pub save_directory: PathBuf,

    /// Face of the floating icon
    #[serde(rename = "emoji")]
    pub active_symbol: String,
}

/// On-disk shape; every field may be missing
#[derive(Debug, Default, Deserialize)]
struct StoredConfig {
    #[serde(default)]
    save_dir: Option<PathBuf>,
    #[serde(default)]
    emoji: Option<String>,
}

impl AppConfig {
    /// Defaults: snippets live next to the config in `home`
    pub fn default_for(home: &Path) -> Self {
        Self {
            save_directory: home.to_path_buf(),
            active_symbol: DEFAULT_SYMBOL.to_string(),
        }
    }

    /// Load from `path`, filling anything missing from `default_for(home)`.
    pub fn load(path: &Path, home: &Path) -> Result<Self> {
        let defaults = Self::default_for(home);
        let stored = match persist::read_json::<StoredConfig>(path)? {
            Some(stored) => stored,
            None => return Ok(defaults),
        };

        let active_symbol = match stored.emoji {
            Some(emoji) if is_symbol(&emoji) => emoji,
            Some(emoji) => {
                warn!("Ignoring invalid symbol {:?} in config", emoji);
                defaults.active_symbol
            }
            None => defaults.active_symbol,
        };

        let config = Self {
            save_directory: stored.save_dir.unwrap_or(defaults.save_directory),
            active_symbol,
        };
        info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Rewrite the whole config file.
    pub fn save(&self, path: &Path) -> Result<()> {
        persist::write_json(path, self)?;
        info!("Saved config to {:?}", path);
        Ok(())
    }

    /// Location of the snippet list
    pub fn snippet_file(&self) -> PathBuf {
        self.save_directory.join(SNIPPET_FILE_NAME)
    }
}
