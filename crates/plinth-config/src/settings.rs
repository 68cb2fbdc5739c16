//! The settings document: serde schema and eager validation.
//!
//! A settings file is a JSON object with three sections:
//!
//! ```json
//! {
//!   "app":     { "name": "parser", "version": "0.1.0" },
//!   "paths":   { "raw_data_dir": "data/raw", "logs_dir": "logs" },
//!   "logging": { "level": "info", "file": { "enabled": true } }
//! }
//! ```
//!
//! Deserialization handles the syntactic checks; [`Settings::validate`]
//! covers the semantic ones. Validation runs before any directory is
//! created, so a rejected document leaves the filesystem untouched.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};

/// Root settings document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Application metadata.
    pub app: AppSection,

    /// Symbolic directory name → relative-or-absolute path string.
    pub paths: BTreeMap<String, String>,

    /// Declarative logger configuration. The section itself is required;
    /// every field inside it has a default, so `"logging": {}` is valid.
    pub logging: LogSettings,
}

/// Application metadata section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppSection {
    /// Application name. Must be non-empty; also names the logger.
    pub name: String,

    /// Application version string.
    #[serde(default = "default_version")]
    pub version: String,
}

fn default_version() -> String {
    "0.0.0".to_string()
}

/// Declarative logger configuration.
///
/// Compiled into `tracing-subscriber` filter directives and sinks at
/// activation time. Every field has a default so a minimal document can
/// omit the whole section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    /// Baseline level for all targets.
    pub level: LogLevel,

    /// Console (stderr) sink.
    pub console: ConsoleSink,

    /// File sink.
    pub file: FileSink,

    /// Per-target level overrides (module path → level).
    pub targets: BTreeMap<String, LogLevel>,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
            console: ConsoleSink::default(),
            file: FileSink::default(),
            targets: BTreeMap::new(),
        }
    }
}

/// Console sink settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleSink {
    pub enabled: bool,
    pub style: ConsoleStyle,
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self {
            enabled: true,
            style: ConsoleStyle::Compact,
        }
    }
}

/// Console formatter selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConsoleStyle {
    Compact,
    Pretty,
}

/// File sink settings.
///
/// When the sink is enabled and `filename` is unset, the resolver injects
/// `<logs_dir>/<app name>.log`. An explicit filename is never overridden.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSink {
    pub enabled: bool,
    pub filename: Option<PathBuf>,
    /// Optional restriction below the baseline level for this sink only.
    pub level: Option<LogLevel>,
}

impl Default for FileSink {
    fn default() -> Self {
        Self {
            enabled: false,
            filename: None,
            level: None,
        }
    }
}

/// Severity levels accepted in the settings document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }

    pub fn as_level(&self) -> tracing::Level {
        match self {
            Self::Trace => tracing::Level::TRACE,
            Self::Debug => tracing::Level::DEBUG,
            Self::Info => tracing::Level::INFO,
            Self::Warn => tracing::Level::WARN,
            Self::Error => tracing::Level::ERROR,
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Settings {
    /// Semantic validation, run after deserialization and before any
    /// directory is created.
    ///
    /// `origin` is the settings file path, carried into error messages.
    pub fn validate(&self, origin: &Path) -> ConfigResult<()> {
        let invalid = |reason: String| ConfigError::Invalid {
            path: origin.to_path_buf(),
            reason,
        };

        if self.app.name.trim().is_empty() {
            return Err(invalid("app.name must be non-empty".to_string()));
        }

        for (key, value) in &self.paths {
            if key.trim().is_empty() {
                return Err(invalid("paths contains an empty key".to_string()));
            }
            if value.trim().is_empty() {
                return Err(invalid(format!("paths.{key} must be a non-empty path")));
            }
        }

        for target in self.logging.targets.keys() {
            if target.trim().is_empty()
                || target.contains(['=', ','])
                || target.contains(char::is_whitespace)
            {
                return Err(invalid(format!(
                    "logging.targets contains an invalid target name: '{target}'"
                )));
            }
        }

        // A file sink with no explicit filename needs somewhere to go.
        if self.logging.file.enabled
            && self.logging.file.filename.is_none()
            && !self.paths.contains_key("logs_dir")
        {
            return Err(invalid(
                "logging.file needs an explicit filename or a 'logs_dir' path entry".to_string(),
            ));
        }

        Ok(())
    }
}
