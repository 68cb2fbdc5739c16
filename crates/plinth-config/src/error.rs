use std::path::PathBuf;

use thiserror::Error;

/// Errors from configuration loading and path lookups.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The settings file does not exist.
    #[error("settings file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The settings file exists but is unreadable, unparseable, or fails
    /// semantic validation.
    #[error("invalid settings in {}: {reason}", .path.display())]
    Invalid { path: PathBuf, reason: String },

    /// A filesystem operation failed while preparing directories or sinks.
    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The requested symbolic directory name is not in the path table.
    #[error("unknown path key: '{0}'")]
    UnknownPathKey(String),

    /// The requested key is not a usable path key (empty or whitespace).
    ///
    /// Kept distinct from [`ConfigError::UnknownPathKey`] so callers can
    /// tell a contract violation from a merely absent entry.
    #[error("invalid path key: '{0}'")]
    InvalidPathKey(String),
}

/// Result alias for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;
