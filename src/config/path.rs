//! Path resolution helpers for configuration values.
//!
//! Supports absolute paths, paths relative to the config file, and "~" home
//! directory expansion.

use std::path::{Path, PathBuf};

use tracing::{debug, trace};

use crate::error::{Result, SnipError};

/// Application directory name under the platform data/config dirs.
const APP_DIR: &str = "snippets";

/// Resolve a path taken from a config file.
///
/// Resolution rules:
/// 1. Paths starting with `~`: expanded to home directory
/// 2. Absolute paths: used as-is
/// 3. Relative paths: resolved relative to the config file's directory
pub fn resolve_path(path: &Path, config_dir: &Path) -> Result<PathBuf> {
    trace!(
        path = %path.display(),
        config_dir = %config_dir.display(),
        "Resolving path"
    );

    if let Some(expanded) = expand_home(path)? {
        return Ok(expanded);
    }

    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }

    let resolved = config_dir.join(path);
    debug!(
        original = %path.display(),
        resolved = %resolved.display(),
        "Resolved relative path"
    );
    Ok(resolved)
}

/// Expand a leading `~` in a path given on the command line or in the
/// environment. Other paths are returned unchanged.
pub fn expand_tilde(path: &Path) -> Result<PathBuf> {
    Ok(expand_home(path)?.unwrap_or_else(|| path.to_path_buf()))
}

fn expand_home(path: &Path) -> Result<Option<PathBuf>> {
    let path_str = path.to_string_lossy();
    if path_str != "~" && !path_str.starts_with("~/") {
        return Ok(None);
    }

    let home = home_dir()?;
    let rest = path_str.strip_prefix("~/").unwrap_or("");
    let resolved = if rest.is_empty() { home } else { home.join(rest) };
    debug!(
        original = %path.display(),
        resolved = %resolved.display(),
        "Expanded home directory path"
    );
    Ok(Some(resolved))
}

/// Resolve the user's home directory (cross-platform).
pub fn home_dir() -> Result<PathBuf> {
    dirs::home_dir().ok_or(SnipError::NoPlatformDir("home"))
}

/// Directory holding the database and log file by default.
///
/// Location: `~/.local/share/snippets/` on Linux.
pub fn default_data_dir() -> Result<PathBuf> {
    let data_dir = dirs::data_local_dir().ok_or(SnipError::NoPlatformDir("local data"))?;
    Ok(data_dir.join(APP_DIR))
}

/// Default config file location.
///
/// Location: `~/.config/snippets/config.toml` on Linux.
pub fn default_config_path() -> Result<PathBuf> {
    let config_dir = dirs::config_dir().ok_or(SnipError::NoPlatformDir("config"))?;
    Ok(config_dir.join(APP_DIR).join("config.toml"))
}
