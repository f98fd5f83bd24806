//! Runtime settings resolved from flags, environment, config file and defaults.
//!
//! Precedence, highest first:
//!
//! 1. command-line flag (`--db`, `--log-file`, `--log-stderr`)
//! 2. environment variable (`SNIPPETS_DB`, `SNIPPETS_LOG_FILE`), read by clap
//! 3. TOML config file (`--config`, `SNIPPETS_CONFIG` or the default location)
//! 4. built-in defaults under the platform data directory
//!
//! ```toml
//! # ~/.config/snippets/config.toml
//! database = "~/notes/snippets.db"
//! log_file = "snippets.log"   # relative to this file
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, instrument};

use super::path::{default_config_path, default_data_dir, expand_tilde, resolve_path};
use crate::cli::Cli;
use crate::error::{Result, SnipError};

const DB_FILE: &str = "snippets.db";
const LOG_FILE: &str = "snippets.log";

/// Where log records go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    /// Append plain-text records to a file.
    File(PathBuf),
    /// Write records to stderr.
    Stderr,
}

/// Contents of the optional TOML config file.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileSettings {
    pub database: Option<PathBuf>,
    pub log_file: Option<PathBuf>,
}

impl FileSettings {
    /// Reads and parses a config file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::parse(&text, path)
    }

    fn parse(text: &str, path: &Path) -> Result<Self> {
        toml::from_str(text).map_err(|e| SnipError::ConfigParse {
            path: path.display().to_string(),
            reason: e.message().to_string(),
        })
    }
}

/// Fully resolved settings for one invocation.
#[derive(Debug, Clone)]
pub struct Settings {
    pub database: PathBuf,
    pub log: LogTarget,
    /// Config file that was read, if any.
    pub config_file: Option<PathBuf>,
}

impl Settings {
    /// Resolves settings against the platform default locations.
    ///
    /// Platform directories are only looked up for values no flag or config
    /// file supplies.
    pub fn resolve(cli: &Cli) -> Result<Self> {
        Self::resolve_from(cli, default_config_path, default_data_dir)
    }

    /// Resolves settings with explicit fallback locations.
    pub fn resolve_with(cli: &Cli, default_config: &Path, data_dir: &Path) -> Result<Self> {
        Self::resolve_from(
            cli,
            || Ok(default_config.to_path_buf()),
            || Ok(data_dir.to_path_buf()),
        )
    }

    #[instrument(skip_all)]
    fn resolve_from<C, D>(cli: &Cli, default_config: C, data_dir: D) -> Result<Self>
    where
        C: FnOnce() -> Result<PathBuf>,
        D: Fn() -> Result<PathBuf>,
    {
        let config_file = match &cli.config {
            Some(path) => {
                let path = expand_tilde(path)?;
                if !path.is_file() {
                    return Err(SnipError::ConfigNotFound {
                        path: path.display().to_string(),
                    });
                }
                Some(path)
            }
            // No platform config dir just means no default config file
            None => default_config().ok().filter(|path| path.is_file()),
        };

        let file = match &config_file {
            Some(path) => {
                debug!(path = %path.display(), "Loading config file");
                FileSettings::load(path)?
            }
            None => FileSettings::default(),
        };
        // File values only exist when a config file was read
        let config_dir = config_file
            .as_deref()
            .and_then(Path::parent)
            .unwrap_or_else(|| Path::new("."));

        let database = match (&cli.db, &file.database) {
            (Some(path), _) => expand_tilde(path)?,
            (None, Some(path)) => resolve_path(path, config_dir)?,
            (None, None) => data_dir()?.join(DB_FILE),
        };

        let log = if cli.log_stderr {
            LogTarget::Stderr
        } else {
            let path = match (&cli.log_file, &file.log_file) {
                (Some(path), _) => expand_tilde(path)?,
                (None, Some(path)) => resolve_path(path, config_dir)?,
                (None, None) => data_dir()?.join(LOG_FILE),
            };
            LogTarget::File(path)
        };

        Ok(Self {
            database,
            log,
            config_file,
        })
    }
}
