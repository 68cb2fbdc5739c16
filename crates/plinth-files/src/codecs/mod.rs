//! Default codec implementations.

pub mod csv;
pub mod json;
pub mod text;

pub use self::csv::CsvCodec;
pub use self::json::JsonCodec;
pub use self::text::TextCodec;
