//! The load/save contract every file codec implements.

use std::path::Path;

use thiserror::Error;

use crate::content::{FileContent, TableError};

/// Errors from a single codec operation.
#[derive(Debug, Error)]
pub enum CodecError {
    /// Underlying filesystem failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not a well-formed document for the JSON codec, or the
    /// content could not be serialized.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The file is not a well-formed table for the CSV codec.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A loaded table violated the header/row invariants.
    #[error(transparent)]
    Table(#[from] TableError),

    /// `save` was handed a content variant the codec does not encode.
    #[error("{codec} codec expects {expected} content, got {found}")]
    ContentMismatch {
        codec: &'static str,
        expected: &'static str,
        found: &'static str,
    },

    /// CSV save with no columns: there is no header to write.
    #[error("cannot derive a CSV header from an empty table")]
    EmptyTable,
}

/// Result alias for codec operations.
pub type CodecResult<T> = Result<T, CodecError>;

/// A paired load/save strategy for one file format.
///
/// Implementations must satisfy these invariants:
/// - `load` never partially succeeds: it returns the whole decoded content
///   or an error, with nothing written anywhere.
/// - `save` writes the encoded content to `path`, replacing any existing
///   file. Overwrite policy is the caller's concern, not the codec's.
/// - A codec checks the content variant it is given and fails with
///   [`CodecError::ContentMismatch`] rather than coercing.
pub trait FileCodec: Send + Sync + std::fmt::Debug {
    /// Short name used in diagnostics (e.g. `"json"`).
    fn name(&self) -> &'static str;

    /// Read and decode the file at `path`.
    fn load(&self, path: &Path) -> CodecResult<FileContent>;

    /// Encode `content` and write it to `path`.
    fn save(&self, content: &FileContent, path: &Path) -> CodecResult<()>;
}
