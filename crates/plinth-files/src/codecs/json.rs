//! JSON codec over `serde_json::Value`.

use std::fs;
use std::path::Path;

use crate::codec::{CodecError, CodecResult, FileCodec};
use crate::content::FileContent;

/// Codec for JSON documents.
///
/// Saves pretty-printed (two-space indentation, trailing newline) so the
/// output is stable and human-diffable.
#[derive(Debug)]
pub struct JsonCodec;

impl FileCodec for JsonCodec {
    fn name(&self) -> &'static str {
        "json"
    }

    fn load(&self, path: &Path) -> CodecResult<FileContent> {
        let contents = fs::read_to_string(path)?;
        let value: serde_json::Value = serde_json::from_str(&contents)?;
        Ok(FileContent::Json(value))
    }

    fn save(&self, content: &FileContent, path: &Path) -> CodecResult<()> {
        match content {
            FileContent::Json(value) => {
                let mut out = serde_json::to_string_pretty(value)?;
                out.push('\n');
                fs::write(path, out)?;
                Ok(())
            }
            other => Err(CodecError::ContentMismatch {
                codec: self.name(),
                expected: "json",
                found: other.kind(),
            }),
        }
    }
}
