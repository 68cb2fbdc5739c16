//! Plain-text codec: raw UTF-8, no transformation.

use std::fs;
use std::path::Path;

use crate::codec::{CodecError, CodecResult, FileCodec};
use crate::content::FileContent;

/// Codec for plain UTF-8 text files.
#[derive(Debug)]
pub struct TextCodec;

impl FileCodec for TextCodec {
    fn name(&self) -> &'static str {
        "text"
    }

    fn load(&self, path: &Path) -> CodecResult<FileContent> {
        Ok(FileContent::Text(fs::read_to_string(path)?))
    }

    fn save(&self, content: &FileContent, path: &Path) -> CodecResult<()> {
        match content {
            FileContent::Text(text) => {
                fs::write(path, text)?;
                Ok(())
            }
            other => Err(CodecError::ContentMismatch {
                codec: self.name(),
                expected: "text",
                found: other.kind(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_round_trip() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("note.txt");
        let content = FileContent::Text("Hello, world!\n".to_string());
        TextCodec.save(&content, &path).unwrap();
        assert_eq!(TextCodec.load(&path).unwrap(), content);
    }

    #[test]
    fn save_rejects_non_text_content() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("note.txt");
        let err = TextCodec
            .save(&FileContent::Json(serde_json::json!({"k": 1})), &path)
            .unwrap_err();
        assert!(matches!(err, CodecError::ContentMismatch { .. }));
        assert!(!path.exists());
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let temp = tempfile::tempdir().unwrap();
        let err = TextCodec.load(&temp.path().join("absent.txt")).unwrap_err();
        assert!(matches!(err, CodecError::Io(_)));
    }
}
