//! JSON file persistence shared by the snippet list and the config

use crate::utils::error::{FloatballError, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Read and parse a JSON file.
///
/// Returns `Ok(None)` when the file does not exist (first run). Invalid
/// UTF-8 is reported as a parse error, other IO failures as `Read`.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>> {
    let raw = match fs::read(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!("No file at {:?}, using defaults", path);
            return Ok(None);
        }
        Err(source) => {
            return Err(FloatballError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    serde_json::from_slice(&raw)
        .map(Some)
        .map_err(|source| FloatballError::Parse {
            path: path.to_path_buf(),
            source,
        })
}

/// Serialize `value` as UTF-8 JSON indented by 4 spaces and replace `path`.
///
/// Written to a sibling temp file first, then renamed over the target.
/// Missing parent directories are created.
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser)?;

    let tmp_path = sibling(path, "tmp");
    fs::write(&tmp_path, &buf)?;
    if let Err(e) = fs::rename(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(e.into());
    }

    debug!("Wrote {} bytes to {:?}", buf.len(), path);
    Ok(())
}

/// Copy an unreadable file aside so a later write cannot destroy it.
///
/// Returns the path of the copy: `<name>.corrupt` next to the original, or
/// `<name>.corrupt.<n>` when earlier backups already exist.
pub fn preserve_corrupt(path: &Path) -> Result<PathBuf> {
    let mut backup = sibling(path, "corrupt");
    let mut attempt = 1;
    while backup.exists() {
        backup = sibling(path, &format!("corrupt.{}", attempt));
        attempt += 1;
    }
    fs::copy(path, &backup)?;
    warn!("Preserved unreadable {:?} as {:?}", path, backup);
    Ok(backup)
}

/// Load the snippet list. A missing file yields an empty list.
pub fn load_snippets(path: &Path) -> Result<Vec<String>> {
    Ok(read_json(path)?.unwrap_or_default())
}

/// Save the snippet list as a JSON array of strings.
pub fn save_snippets(path: &Path, items: &[String]) -> Result<()> {
    write_json(path, items)
}

fn sibling(path: &Path, suffix: &str) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".");
    name.push(suffix);
    path.with_file_name(name)
}
