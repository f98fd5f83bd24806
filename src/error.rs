//! Error types for snippet store operations.

use thiserror::Error;

/// Primary error type for the snippets CLI.
#[derive(Error, Debug)]
pub enum SnipError {
    // Input errors
    #[error("Snippet name must not be empty")]
    EmptyKeyword,

    // Database errors
    #[error("Failed to open database '{path}': {reason}")]
    DatabaseOpen { path: String, reason: String },

    #[error("{context}: {source}")]
    Database {
        context: String,
        #[source]
        source: rusqlite::Error,
    },

    // Configuration errors
    #[error("Configuration file not found: {path}")]
    ConfigNotFound { path: String },

    #[error("Configuration parse error in {path}: {reason}")]
    ConfigParse { path: String, reason: String },

    #[error("Could not determine {0} directory")]
    NoPlatformDir(&'static str),

    // General errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

impl SnipError {
    /// Returns true if the error is recoverable by the user.
    pub const fn is_user_recoverable(&self) -> bool {
        matches!(
            self,
            Self::EmptyKeyword
                | Self::DatabaseOpen { .. }
                | Self::ConfigNotFound { .. }
                | Self::ConfigParse { .. }
        )
    }

    /// Returns a suggestion for how to fix the error.
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::EmptyKeyword => Some("Give the snippet a non-empty name"),
            Self::DatabaseOpen { .. } => {
                Some("Check the --db path (or SNIPPETS_DB) and its permissions")
            }
            Self::ConfigNotFound { .. } => {
                Some("Create the file or drop --config / SNIPPETS_CONFIG")
            }
            Self::ConfigParse { .. } => Some("Supported keys: database, log_file"),
            Self::NoPlatformDir(_) => Some("Pass --db and --log-file explicitly"),
            _ => None,
        }
    }
}

/// Convenience type alias for Results using SnipError.
pub type Result<T> = std::result::Result<T, SnipError>;

/// Extension trait for attaching operation context to database errors.
pub trait ResultExt<T> {
    fn context<S: Into<String>>(self, context: S) -> Result<T>;
}

impl<T> ResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn context<S: Into<String>>(self, context: S) -> Result<T> {
        self.map_err(|source| SnipError::Database {
            context: context.into(),
            source,
        })
    }
}
