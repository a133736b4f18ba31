//! Error types for sheet loading
//!
//! Parsing itself never fails: every input produces some table. These errors
//! come from the layers around the parser (fetching, reading files, and views
//! that need a value to be present).

use thiserror::Error;

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, SheetError>;

/// Errors raised while loading or interpreting a published sheet
#[derive(Debug, Error)]
pub enum SheetError {
    /// The HTTP request could not be sent or its body could not be read
    #[error("Fetch error: {0}")]
    Fetch(String),

    /// The server answered with a non-success status
    #[error("HTTP {status} while fetching {url}")]
    Status { url: String, status: u16 },

    /// A local source (file, stdin) could not be read
    #[error("Read error: {0}")]
    ReadError(String),

    /// The sheet contained no usable row
    #[error("Sheet has no data")]
    EmptySheet,

    /// The cell a view depends on was blank
    #[error("First cell is empty")]
    EmptyCell,

    /// Configuration could not be loaded
    #[error("Config error: {0}")]
    Config(String),
}

#[cfg(feature = "fetch")]
impl From<reqwest::Error> for SheetError {
    fn from(err: reqwest::Error) -> Self {
        SheetError::Fetch(err.to_string())
    }
}

impl From<std::io::Error> for SheetError {
    fn from(err: std::io::Error) -> Self {
        SheetError::ReadError(err.to_string())
    }
}
