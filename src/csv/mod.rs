//! CSV utilities for parsing and encoding

mod encoder;
mod parser;

pub use encoder::CsvEncoder;
pub use parser::{parse_csv, CsvParser};

/// Whether a parsed row was a line holding nothing but whitespace
///
/// Rows with several fields contain a delimiter, so they are never blank.
pub(crate) fn is_blank_line(row: &[String]) -> bool {
    match row {
        [] => true,
        [only] => only.trim().is_empty(),
        _ => false,
    }
}
