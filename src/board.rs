//! Board image URL from a one-cell sheet

use crate::csv::{is_blank_line, CsvParser};
use crate::error::{Result, SheetError};

/// Extract the board image URL from CSV text
///
/// The URL is the first cell of the first line that is not whitespace only.
/// A line such as ` , ` counts as content, so its blank first cell is an
/// error rather than a reason to look further down.
///
/// # Examples
///
/// ```
/// use sheetfeed::board_image_url;
///
/// let url = board_image_url("\n  https://img.example/board.png  ,note\n").unwrap();
/// assert_eq!(url, "https://img.example/board.png");
/// ```
pub fn board_image_url(text: &str) -> Result<String> {
    let rows = CsvParser::default().parse(text);
    let row = rows
        .iter()
        .find(|row| !is_blank_line(row))
        .ok_or(SheetError::EmptySheet)?;

    let url = row.first().map(|c| c.trim()).unwrap_or("");
    if url.is_empty() {
        return Err(SheetError::EmptyCell);
    }
    Ok(url.to_string())
}
