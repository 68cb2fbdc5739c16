//! The `Config` aggregate: validated settings, resolved path table, logger.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, ConfigResult};
use crate::logging::{self, Logger};
use crate::paths;
use crate::settings::Settings;

/// Validated application configuration.
///
/// Built once at process start from a JSON settings file and passed
/// explicitly (usually as `Arc<Config>`) to every component that needs it.
/// Immutable after construction.
#[derive(Debug)]
pub struct Config {
    settings: Settings,
    project_root: PathBuf,
    paths: BTreeMap<String, PathBuf>,
    logger: Logger,
}

impl Config {
    /// Load a settings file, taking its parent directory as the project
    /// root.
    ///
    /// The load is atomic with respect to the filesystem: the document is
    /// parsed and validated in full before any directory is created.
    pub fn load(settings_path: &Path) -> ConfigResult<Self> {
        let root = match settings_path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        Self::load_with_root(settings_path, &root)
    }

    /// Load a settings file against an explicit project root.
    pub fn load_with_root(settings_path: &Path, project_root: &Path) -> ConfigResult<Self> {
        if !settings_path.is_file() {
            return Err(ConfigError::NotFound(settings_path.to_path_buf()));
        }
        let contents = fs::read_to_string(settings_path).map_err(|source| ConfigError::Io {
            path: settings_path.to_path_buf(),
            source,
        })?;
        let mut settings: Settings =
            serde_json::from_str(&contents).map_err(|e| ConfigError::Invalid {
                path: settings_path.to_path_buf(),
                reason: e.to_string(),
            })?;
        settings.validate(settings_path)?;

        let project_root = project_root
            .canonicalize()
            .map_err(|source| ConfigError::Io {
                path: project_root.to_path_buf(),
                source,
            })?;
        let resolved = paths::resolve(&project_root, &settings.paths)?;

        logging::resolve_file_sink(
            &mut settings.logging,
            &resolved,
            &project_root,
            &settings.app.name,
            settings_path,
        )?;
        let logger = logging::activate(&settings.logging, &settings.app.name, settings_path)?;
        logger.info("logger initialized");

        Ok(Self {
            settings,
            project_root,
            paths: resolved,
            logger,
        })
    }

    /// Application name from the settings document.
    pub fn app_name(&self) -> &str {
        &self.settings.app.name
    }

    /// Application version; `"0.0.0"` when the document omitted it.
    pub fn app_version(&self) -> &str {
        &self.settings.app.version
    }

    /// The project root every relative path entry was resolved against.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// The resolved path table: symbolic name → absolute, existing
    /// directory.
    pub fn paths(&self) -> &BTreeMap<String, PathBuf> {
        &self.paths
    }

    /// Look up a symbolic directory name.
    ///
    /// Fails with [`ConfigError::UnknownPathKey`] for absent keys and
    /// [`ConfigError::InvalidPathKey`] for degenerate ones. Key presence
    /// is checked here, not at load time — the path namespace is
    /// open-ended by design.
    pub fn get_path(&self, key: &str) -> ConfigResult<&Path> {
        if key.trim().is_empty() {
            return Err(ConfigError::InvalidPathKey(key.to_string()));
        }
        self.paths
            .get(key)
            .map(PathBuf::as_path)
            .ok_or_else(|| ConfigError::UnknownPathKey(key.to_string()))
    }

    /// The named logger handle activated from the settings document.
    pub fn logger(&self) -> &Logger {
        &self.logger
    }

    /// The validated settings document itself.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_settings(dir: &Path, body: &str) -> PathBuf {
        let path = dir.join("settings.json");
        fs::write(&path, body).unwrap();
        path
    }

    fn quiet_settings(paths: &str) -> String {
        format!(
            r#"{{
                "app": {{ "name": "demo", "version": "0.1.0" }},
                "paths": {paths},
                "logging": {{ "console": {{ "enabled": false }} }}
            }}"#
        )
    }

    #[test]
    fn load_resolves_and_creates_directories() {
        let temp = tempfile::tempdir().unwrap();
        let settings = write_settings(
            temp.path(),
            &quiet_settings(r#"{ "raw_data_dir": "data/raw", "logs_dir": "logs" }"#),
        );
        let config = Config::load(&settings).unwrap();

        let raw = config.get_path("raw_data_dir").unwrap();
        assert!(raw.is_absolute());
        assert!(raw.is_dir());
        assert!(raw.ends_with("data/raw"));
    }

    #[test]
    fn load_is_idempotent_on_disk() {
        let temp = tempfile::tempdir().unwrap();
        let settings = write_settings(temp.path(), &quiet_settings(r#"{ "logs_dir": "logs" }"#));
        let first = Config::load(&settings).unwrap();
        let second = Config::load(&settings).unwrap();
        assert_eq!(first.paths(), second.paths());
        assert!(first.get_path("logs_dir").unwrap().is_dir());
    }

    #[test]
    fn missing_file_is_not_found() {
        let temp = tempfile::tempdir().unwrap();
        let err = Config::load(&temp.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(_)));
    }

    #[test]
    fn malformed_json_is_invalid() {
        let temp = tempfile::tempdir().unwrap();
        let settings = write_settings(temp.path(), "{ not json");
        let err = Config::load(&settings).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { .. }));
    }

    #[test]
    fn missing_app_section_is_invalid() {
        let temp = tempfile::tempdir().unwrap();
        let settings = write_settings(temp.path(), r#"{ "paths": {} }"#);
        let err = Config::load(&settings).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { .. }));
    }

    #[test]
    fn rejected_document_creates_no_directories() {
        let temp = tempfile::tempdir().unwrap();
        let settings = write_settings(
            temp.path(),
            r#"{
                "app": { "name": "" },
                "paths": { "raw_data_dir": "data/raw" },
                "logging": {}
            }"#,
        );
        let err = Config::load(&settings).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { .. }));
        assert!(!temp.path().join("data").exists());
    }

    #[test]
    fn version_defaults_when_omitted() {
        let temp = tempfile::tempdir().unwrap();
        let settings = write_settings(
            temp.path(),
            r#"{
                "app": { "name": "demo" },
                "paths": {},
                "logging": { "console": { "enabled": false } }
            }"#,
        );
        let config = Config::load(&settings).unwrap();
        assert_eq!(config.app_name(), "demo");
        assert_eq!(config.app_version(), "0.0.0");
    }

    #[test]
    fn unknown_path_key_fails() {
        let temp = tempfile::tempdir().unwrap();
        let settings = write_settings(temp.path(), &quiet_settings(r#"{ "logs_dir": "logs" }"#));
        let config = Config::load(&settings).unwrap();
        let err = config.get_path("nonexistent_dir").unwrap_err();
        assert!(matches!(err, ConfigError::UnknownPathKey(_)));
    }

    #[test]
    fn degenerate_path_key_is_a_distinct_failure() {
        let temp = tempfile::tempdir().unwrap();
        let settings = write_settings(temp.path(), &quiet_settings(r#"{ "logs_dir": "logs" }"#));
        let config = Config::load(&settings).unwrap();
        assert!(matches!(
            config.get_path("").unwrap_err(),
            ConfigError::InvalidPathKey(_)
        ));
        assert!(matches!(
            config.get_path("  ").unwrap_err(),
            ConfigError::InvalidPathKey(_)
        ));
    }

    #[test]
    fn file_sink_filename_is_injected_under_logs_dir() {
        let temp = tempfile::tempdir().unwrap();
        let settings = write_settings(
            temp.path(),
            r#"{
                "app": { "name": "demo" },
                "paths": { "logs_dir": "logs" },
                "logging": {
                    "console": { "enabled": false },
                    "file": { "enabled": true }
                }
            }"#,
        );
        let config = Config::load(&settings).unwrap();
        let filename = config.settings().logging.file.filename.clone().unwrap();
        assert_eq!(filename, config.get_path("logs_dir").unwrap().join("demo.log"));
        assert!(filename.is_file());
    }

    #[test]
    fn explicit_file_sink_filename_survives_loading() {
        let temp = tempfile::tempdir().unwrap();
        let target = temp.path().join("explicit.log");
        let settings = write_settings(
            temp.path(),
            &format!(
                r#"{{
                    "app": {{ "name": "demo" }},
                    "paths": {{ "logs_dir": "logs" }},
                    "logging": {{
                        "console": {{ "enabled": false }},
                        "file": {{ "enabled": true, "filename": {} }}
                    }}
                }}"#,
                serde_json::json!(target)
            ),
        );
        let config = Config::load(&settings).unwrap();
        assert_eq!(
            config.settings().logging.file.filename.as_deref(),
            Some(target.as_path())
        );
    }
}
