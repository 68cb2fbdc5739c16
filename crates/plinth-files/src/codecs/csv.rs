//! CSV codec: header-derived columns, ordered row records.

use std::fs::File;
use std::path::Path;

use csv::{ReaderBuilder, WriterBuilder};

use crate::codec::{CodecError, CodecResult, FileCodec};
use crate::content::{FileContent, Table};

/// Codec for CSV tables.
///
/// The first record is the header; it becomes the table's column list.
/// Saving writes the header from the table's columns, so an empty column
/// list is refused.
#[derive(Debug)]
pub struct CsvCodec;

impl FileCodec for CsvCodec {
    fn name(&self) -> &'static str {
        "csv"
    }

    fn load(&self, path: &Path) -> CodecResult<FileContent> {
        let file = File::open(path)?;
        let mut reader = ReaderBuilder::new().has_headers(true).from_reader(file);
        let headers = reader.headers()?.clone();
        let mut table = Table::new(headers.iter().map(str::to_string).collect())?;
        for record in reader.records() {
            let record = record?;
            table.push_row(record.iter().map(str::to_string).collect())?;
        }
        Ok(FileContent::Table(table))
    }

    fn save(&self, content: &FileContent, path: &Path) -> CodecResult<()> {
        match content {
            FileContent::Table(table) => {
                if table.columns().is_empty() {
                    return Err(CodecError::EmptyTable);
                }
                let file = File::create(path)?;
                let mut writer = WriterBuilder::new().from_writer(file);
                writer.write_record(table.columns())?;
                for row in table.rows() {
                    writer.write_record(row)?;
                }
                writer.flush()?;
                Ok(())
            }
            other => Err(CodecError::ContentMismatch {
                codec: self.name(),
                expected: "table",
                found: other.kind(),
            }),
        }
    }
}
