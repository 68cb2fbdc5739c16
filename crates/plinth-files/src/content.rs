//! The closed set of content shapes exchanged with codecs.

use thiserror::Error;

/// Content loaded from or saved to a file.
///
/// A closed variant set so call sites can match exhaustively instead of
/// relying on extension-based knowledge of what a codec yields.
#[derive(Clone, Debug, PartialEq)]
pub enum FileContent {
    /// Opaque UTF-8 text.
    Text(String),
    /// Structured document.
    Json(serde_json::Value),
    /// Ordered rows with unique-keyed columns.
    Table(Table),
}

impl FileContent {
    /// Short name of this variant, used in codec diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::Json(_) => "json",
            Self::Table(_) => "table",
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_json(&self) -> Option<&serde_json::Value> {
        match self {
            Self::Json(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_table(&self) -> Option<&Table> {
        match self {
            Self::Table(table) => Some(table),
            _ => None,
        }
    }
}

/// Errors from [`Table`] construction.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TableError {
    #[error("duplicate column name: '{0}'")]
    DuplicateColumn(String),

    #[error("row has {actual} cells, expected {expected}")]
    RowArity { expected: usize, actual: usize },
}

/// An ordered table: header columns plus rows aligned with them.
///
/// Column names are unique and keep header order; rows keep insertion
/// order. Both invariants are enforced at construction.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Create an empty table with the given header.
    pub fn new(columns: Vec<String>) -> Result<Self, TableError> {
        for (i, column) in columns.iter().enumerate() {
            if columns[..i].contains(column) {
                return Err(TableError::DuplicateColumn(column.clone()));
            }
        }
        Ok(Self {
            columns,
            rows: Vec::new(),
        })
    }

    /// Append a row. Its arity must match the header.
    pub fn push_row(&mut self, row: Vec<String>) -> Result<(), TableError> {
        if row.len() != self.columns.len() {
            return Err(TableError::RowArity {
                expected: self.columns.len(),
                actual: row.len(),
            });
        }
        self.rows.push(row);
        Ok(())
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Cell lookup by row index and column name.
    pub fn get(&self, row: usize, column: &str) -> Option<&str> {
        let index = self.columns.iter().position(|c| c == column)?;
        self.rows.get(row)?.get(index).map(String::as_str)
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
