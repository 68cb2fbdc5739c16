//! The file-access service: directory-key resolution, codec dispatch,
//! overwrite policy, outcome logging.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use plinth_config::Config;

use crate::codec::FileCodec;
use crate::content::FileContent;
use crate::error::{FileError, FileResult};
use crate::registry::CodecRegistry;

/// Loads and saves files by symbolic directory name plus filename.
///
/// A `FileStore` holds the shared [`Config`] (for the path table and the
/// logger) and owns its codec registry. Each call is a single synchronous
/// request with no retained state; registry mutation goes through
/// `&mut self`, so concurrent lookups cannot observe a half-applied
/// registration.
pub struct FileStore {
    config: Arc<Config>,
    registry: CodecRegistry,
}

impl FileStore {
    /// A store with the default codec registry.
    pub fn new(config: Arc<Config>) -> Self {
        Self::with_registry(config, CodecRegistry::with_defaults())
    }

    /// A store with a caller-composed registry.
    pub fn with_registry(config: Arc<Config>, registry: CodecRegistry) -> Self {
        Self { config, registry }
    }

    pub fn registry(&self) -> &CodecRegistry {
        &self.registry
    }

    /// Insert or replace a codec; see [`CodecRegistry::register`].
    pub fn register_codec(&mut self, extension: &str, codec: Arc<dyn FileCodec>) {
        self.registry.register(extension, codec);
    }

    /// Load `filename` from the directory named `dir_key`.
    pub fn load_file(&self, dir_key: &str, filename: &str) -> FileResult<FileContent> {
        let dir = self.config.get_path(dir_key)?;
        self.load_at(dir.join(filename))
    }

    /// Load from a caller-resolved path, bypassing the directory-key
    /// indirection.
    pub fn load_path(&self, path: impl AsRef<Path>) -> FileResult<FileContent> {
        self.load_at(path.as_ref().to_path_buf())
    }

    /// Save `content` as `filename` in the directory named `dir_key`.
    ///
    /// With `overwrite` disabled, an existing target fails with
    /// [`FileError::AlreadyExists`] before the codec is invoked, leaving
    /// the file untouched.
    pub fn save_file(
        &self,
        content: &FileContent,
        dir_key: &str,
        filename: &str,
        overwrite: bool,
    ) -> FileResult<()> {
        let dir = self.config.get_path(dir_key)?;
        self.save_at(content, dir.join(filename), overwrite)
    }

    /// Save to a caller-resolved path, bypassing the directory-key
    /// indirection.
    pub fn save_path(
        &self,
        content: &FileContent,
        path: impl AsRef<Path>,
        overwrite: bool,
    ) -> FileResult<()> {
        self.save_at(content, path.as_ref().to_path_buf(), overwrite)
    }

    fn load_at(&self, path: PathBuf) -> FileResult<FileContent> {
        let codec = self.registry.resolve(&path)?;
        match codec.load(&path) {
            Ok(content) => {
                self.config
                    .logger()
                    .info(&format!("loaded file: {}", path.display()));
                Ok(content)
            }
            Err(source) => {
                self.config
                    .logger()
                    .error(&format!("failed to load {}: {source}", path.display()));
                Err(FileError::Access { path, source })
            }
        }
    }

    fn save_at(&self, content: &FileContent, path: PathBuf, overwrite: bool) -> FileResult<()> {
        if !overwrite && path.exists() {
            self.config
                .logger()
                .warning(&format!("file exists, overwrite disabled: {}", path.display()));
            return Err(FileError::AlreadyExists(path));
        }
        let codec = self.registry.resolve(&path)?;
        match codec.save(content, &path) {
            Ok(()) => {
                self.config
                    .logger()
                    .info(&format!("saved file: {}", path.display()));
                Ok(())
            }
            Err(source) => {
                self.config
                    .logger()
                    .error(&format!("failed to save {}: {source}", path.display()));
                Err(FileError::Access { path, source })
            }
        }
    }
}

impl std::fmt::Debug for FileStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileStore")
            .field("app", &self.config.app_name())
            .field("registry", &self.registry)
            .finish()
    }
}
