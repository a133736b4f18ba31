//! # sheetfeed
//!
//! Turn spreadsheet data published as CSV into structured values.
//!
//! The core is a lenient CSV parser that understands quoted fields with
//! embedded delimiters, doubled quotes and line breaks. On top of it sit a
//! few views used by puzzle and game pages:
//!
//! - [`Table`]: header row plus trimmed, header-keyed [`Record`]s
//! - [`PuzzleCalendar`]: one [`Puzzle`] per `YYYY-MM-DD` date
//! - [`Inventory`]: item quantities grouped by player
//! - [`board_image_url`]: first non-blank cell of a sheet
//!
//! With the `fetch` feature (default), [`SheetClient`] downloads a sheet and
//! returns any of these views.
//!
//! ## Quick Start
//!
//! ```
//! use sheetfeed::{parse_csv, Table};
//!
//! let text = "date,title\n2025-11-01,\"Kakuro\nhard\"\n";
//! assert_eq!(parse_csv(text), vec![vec!["date", "title"], vec!["2025-11-01", "Kakuro\nhard"]]);
//!
//! let table = Table::parse(text);
//! assert_eq!(table.records()[0].get("title"), "Kakuro\nhard");
//! ```

pub mod board;
pub mod calendar;
pub mod config;
pub mod csv;
pub mod error;
#[cfg(feature = "fetch")]
pub mod fetch;
pub mod inventory;
pub mod types;

pub use board::board_image_url;
pub use calendar::{format_date_key, month_name, Puzzle, PuzzleCalendar};
pub use config::SheetConfig;
pub use csv::{parse_csv, CsvEncoder, CsvParser};
pub use error::{Result, SheetError};
#[cfg(feature = "fetch")]
pub use fetch::SheetClient;
pub use inventory::{Inventory, InventoryItem};
pub use types::{Record, Table};
