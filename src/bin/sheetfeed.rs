use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use sheetfeed::{
    board_image_url, Inventory, PuzzleCalendar, SheetClient, SheetConfig, Table,
};
use std::path::PathBuf;
use tokio::io::AsyncReadExt;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

/// Print a published sheet as JSON
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Pretty-print the JSON output
    #[arg(long, global = true)]
    pretty: bool,

    #[command(subcommand)]
    view: View,
}

#[derive(Subcommand, Debug)]
enum View {
    /// Raw rows of fields
    Rows { source: String },
    /// Header-keyed records
    Table { source: String },
    /// Puzzle calendar (defaults to CALENDAR_CSV_URL)
    Calendar { source: Option<String> },
    /// Per-player inventory (defaults to INVENTORY_CSV_URL)
    Inventory { source: Option<String> },
    /// Board image URL (defaults to BOARD_CSV_URL)
    Board { source: Option<String> },
}

/// Read CSV text from a URL, a file, or stdin (`-`)
async fn load(client: &SheetClient, source: &str) -> Result<String> {
    if source.starts_with("http://") || source.starts_with("https://") {
        return Ok(client.fetch_text(source).await?);
    }
    if source == "-" {
        let mut text = String::new();
        tokio::io::stdin()
            .read_to_string(&mut text)
            .await
            .context("reading stdin")?;
        return Ok(text);
    }
    let path = PathBuf::from(source);
    tokio::fs::read_to_string(&path)
        .await
        .with_context(|| format!("reading {}", path.display()))
}

fn print<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{}", json);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = SheetConfig::from_env()?;
    let client = SheetClient::new();

    match args.view {
        View::Rows { source } => {
            let text = load(&client, &source).await?;
            print(&sheetfeed::parse_csv(&text), args.pretty)?;
        }
        View::Table { source } => {
            let text = load(&client, &source).await?;
            print(&Table::parse(&text), args.pretty)?;
        }
        View::Calendar { source } => {
            let source = source.unwrap_or(config.calendar_csv_url);
            let calendar = PuzzleCalendar::parse(&load(&client, &source).await?);
            info!(puzzles = calendar.len(), "calendar loaded");
            print(&calendar, args.pretty)?;
        }
        View::Inventory { source } => {
            let source = source.unwrap_or(config.inventory_csv_url);
            let inventory = Inventory::parse(&load(&client, &source).await?);
            info!(players = inventory.players().len(), "inventory loaded");
            print(&inventory, args.pretty)?;
        }
        View::Board { source } => {
            let source = source.unwrap_or(config.board_csv_url);
            let url = board_image_url(&load(&client, &source).await?)
                .context("board sheet should have the image URL in its first cell")?;
            print(&url, args.pretty)?;
        }
    }

    Ok(())
}
