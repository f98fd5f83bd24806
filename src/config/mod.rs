//! Configuration for the snippets CLI.
//!
//! Resolves where the database and log file live. Values come from
//! command-line flags, environment variables, an optional TOML file and
//! platform defaults, in that order.

mod path;
mod settings;

pub use path::{default_config_path, default_data_dir, expand_tilde, home_dir, resolve_path};
pub use settings::{FileSettings, LogTarget, Settings};
