//! The extension → codec registry.

use std::collections::BTreeMap;
use std::ffi::OsStr;
use std::path::Path;
use std::sync::Arc;

use crate::codec::FileCodec;
use crate::codecs::{CsvCodec, JsonCodec, TextCodec};
use crate::error::{FileError, FileResult};

/// Registry mapping normalized file extensions to codecs.
///
/// An explicit value owned by whoever dispatches on it — not type-level
/// state. Extensions are stored lowercase with a leading `.`; the last
/// registration for an extension wins, which lets applications override a
/// default codec without touching the registry internals.
pub struct CodecRegistry {
    codecs: BTreeMap<String, Arc<dyn FileCodec>>,
}

impl CodecRegistry {
    /// An empty registry, for callers composing their own codec set.
    pub fn empty() -> Self {
        Self {
            codecs: BTreeMap::new(),
        }
    }

    /// A registry with the default entries installed: `.json`, `.csv`,
    /// and the text codec under `.txt`, `.log`, and `.md`.
    pub fn with_defaults() -> Self {
        let mut registry = Self::empty();
        let text: Arc<dyn FileCodec> = Arc::new(TextCodec);
        registry.register(".txt", Arc::clone(&text));
        registry.register(".log", Arc::clone(&text));
        registry.register(".md", text);
        registry.register(".json", Arc::new(JsonCodec));
        registry.register(".csv", Arc::new(CsvCodec));
        registry
    }

    /// Insert or replace the codec for `extension`.
    ///
    /// The extension is normalized: lowercased, leading `.` added when
    /// missing. There is no removal operation.
    pub fn register(&mut self, extension: &str, codec: Arc<dyn FileCodec>) {
        let key = normalize_extension(extension);
        if let Some(previous) = self.codecs.insert(key.clone(), codec) {
            tracing::debug!(extension = %key, "replacing {} codec", previous.name());
        }
    }

    /// Resolve the codec for `path` by its extension, case-insensitively.
    pub fn resolve(&self, path: &Path) -> FileResult<&Arc<dyn FileCodec>> {
        let extension = extension_of(path);
        self.codecs
            .get(&extension)
            .ok_or_else(|| FileError::UnsupportedFileType {
                extension,
                supported: self.supported(),
            })
    }

    /// The currently registered extensions, sorted.
    pub fn supported(&self) -> Vec<String> {
        self.codecs.keys().cloned().collect()
    }

    /// Number of registered extensions.
    pub fn len(&self) -> usize {
        self.codecs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codecs.is_empty()
    }
}

impl Default for CodecRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl std::fmt::Debug for CodecRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CodecRegistry")
            .field("extensions", &self.supported())
            .finish()
    }
}

fn normalize_extension(extension: &str) -> String {
    let extension = extension.trim().to_ascii_lowercase();
    if extension.starts_with('.') {
        extension
    } else {
        format!(".{extension}")
    }
}

fn extension_of(path: &Path) -> String {
    path.extension()
        .and_then(OsStr::to_str)
        .map(|e| format!(".{}", e.to_ascii_lowercase()))
        .unwrap_or_default()
}
