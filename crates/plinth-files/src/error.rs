use std::path::PathBuf;

use thiserror::Error;

use plinth_config::ConfigError;

use crate::codec::CodecError;

/// Errors from file-access operations.
#[derive(Debug, Error)]
pub enum FileError {
    /// A directory-key lookup failed in the configuration.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// No codec is registered for the path's extension.
    ///
    /// Carries the rejected extension (empty for extension-less paths)
    /// and the currently supported extensions, sorted, for diagnostics.
    #[error("unsupported file type '{extension}' (supported: {})", .supported.join(", "))]
    UnsupportedFileType {
        extension: String,
        supported: Vec<String>,
    },

    /// Overwrite guard: the target exists and overwriting was disabled.
    #[error("file already exists: {}", .0.display())]
    AlreadyExists(PathBuf),

    /// A codec-level load/save failure, wrapped with the resolved path.
    #[error("file access failed at {}: {source}", .path.display())]
    Access {
        path: PathBuf,
        #[source]
        source: CodecError,
    },
}

/// Result alias for file-access operations.
pub type FileResult<T> = Result<T, FileError>;
