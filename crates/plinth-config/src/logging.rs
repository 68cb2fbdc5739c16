//! Logger derivation and one-time backend activation.
//!
//! The settings document's `logging` section is compiled into
//! `tracing-subscriber` pieces: an [`EnvFilter`] built from the baseline
//! level plus per-target overrides, an optional stderr layer, and an
//! optional file layer. Activation installs the global dispatcher; the
//! dispatcher is set-once per process, so a later activation keeps the
//! first subscriber and still hands back a usable [`Logger`].

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::{Layer, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Registry};

use crate::error::{ConfigError, ConfigResult};
use crate::settings::{ConsoleStyle, LogSettings};

/// Named logger handle.
///
/// Thin facade over `tracing` events; every record carries the application
/// name as an `app` field. `critical` maps to ERROR — the backend's highest
/// level — with a `critical` marker field.
#[derive(Clone, Debug)]
pub struct Logger {
    app: Arc<str>,
}

impl Logger {
    pub fn new(app: &str) -> Self {
        Self {
            app: Arc::from(app),
        }
    }

    /// The application name this handle was derived from.
    pub fn app(&self) -> &str {
        &self.app
    }

    pub fn debug(&self, message: &str) {
        tracing::debug!(app = %self.app, "{message}");
    }

    pub fn info(&self, message: &str) {
        tracing::info!(app = %self.app, "{message}");
    }

    pub fn warning(&self, message: &str) {
        tracing::warn!(app = %self.app, "{message}");
    }

    pub fn error(&self, message: &str) {
        tracing::error!(app = %self.app, "{message}");
    }

    pub fn critical(&self, message: &str) {
        tracing::error!(app = %self.app, critical = true, "{message}");
    }
}

/// Fill in the file sink's filename when it is unset.
///
/// Policy: only fill when missing, never override an explicit value. An
/// explicit relative filename is interpreted against the project root; the
/// injected default is `<logs_dir>/<app name>.log`.
pub fn resolve_file_sink(
    logging: &mut LogSettings,
    paths: &BTreeMap<String, PathBuf>,
    root: &Path,
    app_name: &str,
    origin: &Path,
) -> ConfigResult<()> {
    if !logging.file.enabled {
        return Ok(());
    }
    let resolved = match logging.file.filename.take() {
        Some(explicit) if explicit.is_absolute() => explicit,
        Some(explicit) => root.join(explicit),
        None => {
            let logs_dir = paths.get("logs_dir").ok_or_else(|| ConfigError::Invalid {
                path: origin.to_path_buf(),
                reason: "logging.file needs an explicit filename or a 'logs_dir' path entry"
                    .to_string(),
            })?;
            logs_dir.join(format!("{app_name}.log"))
        }
    };
    logging.file.filename = Some(resolved);
    Ok(())
}

/// Filter directives for the baseline level plus per-target overrides,
/// in `EnvFilter` syntax (e.g. `info,plinth_files=debug`).
pub fn filter_directives(settings: &LogSettings) -> String {
    let mut directives = settings.level.as_str().to_string();
    for (target, level) in &settings.targets {
        directives.push(',');
        directives.push_str(target);
        directives.push('=');
        directives.push_str(level.as_str());
    }
    directives
}

/// Compile the logging settings and install the global subscriber.
///
/// `origin` is the settings file path, carried into error messages. The
/// file sink's filename must already be resolved (see
/// [`resolve_file_sink`]).
pub fn activate(settings: &LogSettings, app_name: &str, origin: &Path) -> ConfigResult<Logger> {
    let directives = filter_directives(settings);
    let filter = EnvFilter::try_new(&directives).map_err(|e| ConfigError::Invalid {
        path: origin.to_path_buf(),
        reason: format!("logging filter '{directives}': {e}"),
    })?;

    let mut layers: Vec<Box<dyn Layer<Registry> + Send + Sync>> = Vec::new();

    if settings.console.enabled {
        let layer = fmt::layer().with_writer(std::io::stderr);
        layers.push(match settings.console.style {
            ConsoleStyle::Compact => layer.compact().boxed(),
            ConsoleStyle::Pretty => layer.pretty().boxed(),
        });
    }

    if settings.file.enabled {
        let path = settings
            .file
            .filename
            .as_ref()
            .ok_or_else(|| ConfigError::Invalid {
                path: origin.to_path_buf(),
                reason: "logging.file.filename is unresolved".to_string(),
            })?;
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|source| ConfigError::Io {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }
        let file = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|source| ConfigError::Io {
                path: path.clone(),
                source,
            })?;
        let layer = fmt::layer().with_writer(Arc::new(file)).with_ansi(false);
        layers.push(match settings.file.level {
            Some(level) => layer
                .with_filter(LevelFilter::from_level(level.as_level()))
                .boxed(),
            None => layer.boxed(),
        });
    }

    // Set-once: a second activation keeps the existing subscriber.
    let _ = tracing_subscriber::registry()
        .with(layers)
        .with(filter)
        .try_init();

    Ok(Logger::new(app_name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::LogLevel;

    fn settings() -> LogSettings {
        LogSettings::default()
    }

    #[test]
    fn directives_baseline_only() {
        assert_eq!(filter_directives(&settings()), "info");
    }

    #[test]
    fn directives_with_targets() {
        let mut s = settings();
        s.level = LogLevel::Warn;
        s.targets.insert("plinth_files".to_string(), LogLevel::Debug);
        s.targets.insert("serde".to_string(), LogLevel::Error);
        assert_eq!(
            filter_directives(&s),
            "warn,plinth_files=debug,serde=error"
        );
    }

    #[test]
    fn disabled_file_sink_is_left_alone() {
        let mut s = settings();
        resolve_file_sink(
            &mut s,
            &BTreeMap::new(),
            Path::new("/root"),
            "demo",
            Path::new("settings.json"),
        )
        .unwrap();
        assert_eq!(s.file.filename, None);
    }

    #[test]
    fn missing_filename_is_injected_under_logs_dir() {
        let mut s = settings();
        s.file.enabled = true;
        let mut paths = BTreeMap::new();
        paths.insert("logs_dir".to_string(), PathBuf::from("/var/log/demo"));
        resolve_file_sink(
            &mut s,
            &paths,
            Path::new("/root"),
            "demo",
            Path::new("settings.json"),
        )
        .unwrap();
        assert_eq!(s.file.filename, Some(PathBuf::from("/var/log/demo/demo.log")));
    }

    #[test]
    fn explicit_absolute_filename_is_never_overridden() {
        let mut s = settings();
        s.file.enabled = true;
        s.file.filename = Some(PathBuf::from("/tmp/explicit.log"));
        let mut paths = BTreeMap::new();
        paths.insert("logs_dir".to_string(), PathBuf::from("/var/log/demo"));
        resolve_file_sink(
            &mut s,
            &paths,
            Path::new("/root"),
            "demo",
            Path::new("settings.json"),
        )
        .unwrap();
        assert_eq!(s.file.filename, Some(PathBuf::from("/tmp/explicit.log")));
    }

    #[test]
    fn explicit_relative_filename_is_joined_to_root() {
        let mut s = settings();
        s.file.enabled = true;
        s.file.filename = Some(PathBuf::from("out/run.log"));
        resolve_file_sink(
            &mut s,
            &BTreeMap::new(),
            Path::new("/root"),
            "demo",
            Path::new("settings.json"),
        )
        .unwrap();
        assert_eq!(s.file.filename, Some(PathBuf::from("/root/out/run.log")));
    }

    #[test]
    fn enabled_sink_with_no_target_fails() {
        let mut s = settings();
        s.file.enabled = true;
        let err = resolve_file_sink(
            &mut s,
            &BTreeMap::new(),
            Path::new("/root"),
            "demo",
            Path::new("settings.json"),
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { .. }));
    }

    #[test]
    fn activation_returns_a_working_handle() {
        let temp = tempfile::tempdir().unwrap();
        let mut s = settings();
        s.console.enabled = false;
        s.file.enabled = true;
        s.file.filename = Some(temp.path().join("logs/app.log"));
        let logger = activate(&s, "demo", Path::new("settings.json")).unwrap();
        assert_eq!(logger.app(), "demo");
        logger.info("activated");
        // Second activation keeps the first subscriber and still succeeds.
        let again = activate(&s, "demo", Path::new("settings.json")).unwrap();
        again.warning("still works");
    }
}
