//! Resolution of the `paths` section into real directories.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, ConfigResult};

/// Resolve every `paths` entry to an absolute directory and create it.
///
/// Relative entries are joined to `root`; `~`-prefixed entries are expanded
/// against the home directory. Creation uses `create_dir_all`, so repeat
/// calls over the same document are idempotent and pre-existing directories
/// are not an error. Nothing is ever removed.
pub fn resolve(
    root: &Path,
    entries: &BTreeMap<String, String>,
) -> ConfigResult<BTreeMap<String, PathBuf>> {
    let mut resolved = BTreeMap::new();
    for (key, raw) in entries {
        let path = expand_home(raw);
        let absolute = if path.is_absolute() {
            path
        } else {
            root.join(path)
        };
        fs::create_dir_all(&absolute).map_err(|source| ConfigError::Io {
            path: absolute.clone(),
            source,
        })?;
        resolved.insert(key.clone(), absolute);
    }
    Ok(resolved)
}

fn expand_home(raw: &str) -> PathBuf {
    if raw == "~" {
        if let Some(home) = dirs::home_dir() {
            return home;
        }
    }
    if let Some(rest) = raw.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(raw)
}
