//! Platform-specific utilities for Floatball
//!
//! This module provides:
//! - The fixed home directory that holds `config.json`
//! - Registration of the executable to run at user login

use crate::utils::error::Result;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Name of the dotfile directory under the user's home
pub const APP_DIR_NAME: &str = ".floating_ball";

/// Name of the config file inside the app directory
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Returns the fixed application directory
/// - All platforms: ~/.floating_ball
///
/// Falls back to the current directory when no home directory can be resolved.
pub fn app_home_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| {
            warn!("Could not determine home directory, using current directory");
            PathBuf::from(".")
        })
        .join(APP_DIR_NAME)
}

/// Returns the config file path inside `home`
pub fn config_file_path(home: &Path) -> PathBuf {
    home.join(CONFIG_FILE_NAME)
}

/// Register the running executable to start at login.
///
/// Best-effort: callers log the error and carry on.
pub fn register_autostart() -> Result<()> {
    let exe = std::env::current_exe()?;
    write_run_entry(&exe)
}

#[cfg(target_os = "windows")]
mod run_key {
    /// Registry key holding per-user login programs
    pub const RUN_KEY: &str = r"Software\Microsoft\Windows\CurrentVersion\Run";

    /// Value name written under the Run key
    pub const VALUE_NAME: &str = "FloatingBallApp";

    pub fn wide(value: &str) -> Vec<u16> {
        value.encode_utf16().chain(std::iter::once(0)).collect()
    }
}

#[cfg(target_os = "windows")]
fn write_run_entry(exe: &Path) -> Result<()> {
    use crate::utils::error::FloatballError;
    use winapi::shared::minwindef::HKEY;
    use winapi::shared::winerror::ERROR_SUCCESS;
    use winapi::um::winnt::{KEY_SET_VALUE, REG_SZ};
    use winapi::um::winreg::{RegCloseKey, RegOpenKeyExW, RegSetValueExW, HKEY_CURRENT_USER};

    let sub_key = run_key::wide(run_key::RUN_KEY);
    let name = run_key::wide(run_key::VALUE_NAME);
    // Quoted so paths with spaces survive the shell
    let value = run_key::wide(&format!("\"{}\"", exe.display()));
    let mut hkey: HKEY = std::ptr::null_mut();

    // SAFETY: all pointers reference live, NUL-terminated buffers; the key
    // handle is closed before leaving the block.
    let status = unsafe {
        let opened = RegOpenKeyExW(
            HKEY_CURRENT_USER,
            sub_key.as_ptr(),
            0,
            KEY_SET_VALUE,
            &mut hkey,
        );
        if opened != ERROR_SUCCESS as i32 {
            return Err(FloatballError::Autostart(format!(
                "RegOpenKeyExW returned {}",
                opened
            )));
        }

        let written = RegSetValueExW(
            hkey,
            name.as_ptr(),
            0,
            REG_SZ,
            value.as_ptr() as *const u8,
            (value.len() * std::mem::size_of::<u16>()) as u32,
        );
        RegCloseKey(hkey);
        written
    };

    if status != ERROR_SUCCESS as i32 {
        return Err(FloatballError::Autostart(format!(
            "RegSetValueExW returned {}",
            status
        )));
    }

    tracing::info!("Registered {:?} to start at login", exe);
    Ok(())
}

#[cfg(not(target_os = "windows"))]
fn write_run_entry(exe: &Path) -> Result<()> {
    tracing::debug!("Autostart registration is Windows-only, skipping {:?}", exe);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_home_dir_is_dotfile_dir() {
        let dir = app_home_dir();
        assert_eq!(
            dir.file_name().and_then(|n| n.to_str()),
            Some(APP_DIR_NAME)
        );
    }

    #[test]
    fn test_config_file_path_is_inside_home() {
        let home = PathBuf::from("/home/someone/.floating_ball");
        let path = config_file_path(&home);
        assert!(path.starts_with(&home));
        assert!(path.to_string_lossy().ends_with("config.json"));
    }

    #[cfg(not(target_os = "windows"))]
    #[test]
    fn test_autostart_is_noop_off_windows() {
        assert!(register_autostart().is_ok());
    }

    #[cfg(target_os = "windows")]
    #[test]
    fn test_wide_strings_are_nul_terminated() {
        let wide = run_key::wide("Run");
        assert_eq!(wide.last(), Some(&0));
        assert_eq!(wide.len(), 4);
    }
}
