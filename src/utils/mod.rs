//! Utility modules for error handling, configuration and platform glue

pub mod config;
pub mod error;
pub mod platform;
pub mod symbol;

// Re-export for convenience
pub use config::AppConfig;
pub use error::{FloatballError, Result};
pub use platform::{app_home_dir, config_file_path, register_autostart};
pub use symbol::{is_symbol, DEFAULT_SYMBOL};
