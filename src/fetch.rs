//! Fetching published sheets over HTTP
//!
//! One plain GET per call: no authentication, no custom headers, no retries.
//! A failed request is reported once through [`SheetError`].

use crate::board::board_image_url;
use crate::calendar::PuzzleCalendar;
use crate::csv::CsvParser;
use crate::error::{Result, SheetError};
use crate::inventory::Inventory;
use crate::types::Table;
use reqwest::Client;
use tracing::{debug, info};

const PREVIEW_CHARS: usize = 200;

/// HTTP client for sheets published as CSV
///
/// # Examples
///
/// ```no_run
/// use sheetfeed::{SheetClient, SheetConfig};
///
/// # async fn run() -> sheetfeed::Result<()> {
/// let config = SheetConfig::from_env()?;
/// let client = SheetClient::new();
/// let calendar = client.fetch_calendar(&config.calendar_csv_url).await?;
/// println!("{} puzzles", calendar.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct SheetClient {
    client: Client,
    parser: CsvParser,
}

impl SheetClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reuse an existing reqwest client
    pub fn with_client(client: Client) -> Self {
        SheetClient {
            client,
            parser: CsvParser::default(),
        }
    }

    /// Use a parser with a custom delimiter or quote (builder pattern)
    pub fn parser(mut self, parser: CsvParser) -> Self {
        self.parser = parser;
        self
    }

    /// GET the sheet body as text
    pub async fn fetch_text(&self, url: &str) -> Result<String> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| SheetError::Fetch(format!("GET {}: {}", url, e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SheetError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let text = response.text().await?;
        let preview: String = text.chars().take(PREVIEW_CHARS).collect();
        debug!(url, bytes = text.len(), preview = %preview, "fetched sheet");
        Ok(text)
    }

    /// Fetch and parse into raw rows
    pub async fn fetch_rows(&self, url: &str) -> Result<Vec<Vec<String>>> {
        let text = self.fetch_text(url).await?;
        let rows = self.parser.parse(&text);
        info!(url, rows = rows.len(), "parsed sheet");
        Ok(rows)
    }

    /// Fetch and map rows onto the header row
    pub async fn fetch_table(&self, url: &str) -> Result<Table> {
        let text = self.fetch_text(url).await?;
        Ok(Table::from_rows(self.parser.parse(text.trim())))
    }

    /// Fetch the puzzle calendar sheet
    pub async fn fetch_calendar(&self, url: &str) -> Result<PuzzleCalendar> {
        let table = self.fetch_table(url).await?;
        let calendar = PuzzleCalendar::from_table(&table);
        info!(url, puzzles = calendar.len(), "loaded puzzle calendar");
        Ok(calendar)
    }

    /// Fetch the inventory sheet
    pub async fn fetch_inventory(&self, url: &str) -> Result<Inventory> {
        let rows = self.fetch_rows(url).await?;
        Ok(Inventory::from_rows(&rows))
    }

    /// Fetch the board sheet and return its image URL
    pub async fn fetch_board_url(&self, url: &str) -> Result<String> {
        let text = self.fetch_text(url).await?;
        board_image_url(&text)
    }
}
