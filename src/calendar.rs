//! Puzzle calendar built from a published sheet
//!
//! The sheet has one row per day with at least a `date` column
//! (`YYYY-MM-DD`), and optionally `url`, `title`, `source`, `star`, `scoring`
//! and `active`. Rows without a date, or explicitly deactivated, are left out.

use crate::types::{Record, Table};
use chrono::{Datelike, Month, NaiveDate};
use indexmap::IndexMap;

const DATE_COLUMN: &str = "date";
const ACTIVE_COLUMN: &str = "active";

/// One day's puzzle
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Puzzle {
    pub url: String,
    pub title: String,
    pub source: String,
    pub star: String,
    /// Free text, may span several lines
    pub scoring: String,
}

impl Puzzle {
    fn from_record(record: &Record) -> Self {
        Puzzle {
            url: record.get("url").to_string(),
            title: record.get("title").to_string(),
            source: record.get("source").to_string(),
            star: record.get("star").to_string(),
            scoring: record.get("scoring").to_string(),
        }
    }

    /// Whether the day links somewhere and should be highlighted
    pub fn is_linked(&self) -> bool {
        !self.url.is_empty()
    }

    /// Whether the day carries a star marker
    pub fn has_star(&self) -> bool {
        !self.star.is_empty()
    }

    /// Title to display, with a fallback for untitled puzzles
    pub fn label(&self) -> &str {
        if self.title.is_empty() {
            "Puzzle available"
        } else {
            &self.title
        }
    }

    /// Scoring text with any leading and trailing double quotes stripped
    pub fn cleaned_scoring(&self) -> &str {
        self.scoring.trim_matches('"')
    }
}

/// Puzzles keyed by `YYYY-MM-DD`, in sheet order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct PuzzleCalendar {
    puzzles: IndexMap<String, Puzzle>,
}

impl PuzzleCalendar {
    /// Collect puzzles from a table
    ///
    /// `active` defaults to true; `false` or `0` (any case) hides a row.
    /// A later row for the same date replaces an earlier one.
    ///
    /// # Examples
    ///
    /// ```
    /// use sheetfeed::{PuzzleCalendar, Table};
    ///
    /// let table = Table::parse("date,url,title,active\n2025-11-01,https://x/1,Nonogram,\n2025-11-02,https://x/2,Hidden,FALSE\n");
    /// let calendar = PuzzleCalendar::from_table(&table);
    /// assert_eq!(calendar.len(), 1);
    /// assert_eq!(calendar.get("2025-11-01").unwrap().title, "Nonogram");
    /// ```
    pub fn from_table(table: &Table) -> Self {
        let mut puzzles = IndexMap::new();

        for record in table.records() {
            let date = record.get(DATE_COLUMN);
            if date.is_empty() {
                continue;
            }
            if !is_active(record) {
                tracing::debug!(date, "skipping inactive puzzle");
                continue;
            }
            puzzles.insert(date.to_string(), Puzzle::from_record(record));
        }

        PuzzleCalendar { puzzles }
    }

    /// Parse CSV text straight into a calendar
    pub fn parse(text: &str) -> Self {
        Self::from_table(&Table::parse(text))
    }

    /// Look up a puzzle by its `YYYY-MM-DD` key
    pub fn get(&self, key: &str) -> Option<&Puzzle> {
        self.puzzles.get(key)
    }

    /// Look up the puzzle for a calendar day
    pub fn get_date(&self, date: NaiveDate) -> Option<&Puzzle> {
        self.get(&format_date_key(date))
    }

    /// Puzzles falling in the given month (1-12), ordered by day
    pub fn in_month(&self, year: i32, month: u32) -> Vec<(NaiveDate, &Puzzle)> {
        let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
            return Vec::new();
        };

        first
            .iter_days()
            .take_while(|d| d.month() == month)
            .filter_map(|d| self.get_date(d).map(|p| (d, p)))
            .collect()
    }

    /// Iterate `(date key, puzzle)` pairs in sheet order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Puzzle)> {
        self.puzzles.iter().map(|(k, p)| (k.as_str(), p))
    }

    pub fn len(&self) -> usize {
        self.puzzles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.puzzles.is_empty()
    }
}

fn is_active(record: &Record) -> bool {
    let active = match record.get(ACTIVE_COLUMN) {
        "" => "TRUE".to_string(),
        value => value.to_lowercase(),
    };
    active != "false" && active != "0"
}

/// Format a day as the zero-padded `YYYY-MM-DD` key used by the sheet
pub fn format_date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// English month name for a month number (1-12)
pub fn month_name(month: u32) -> Option<&'static str> {
    u8::try_from(month)
        .ok()
        .and_then(|m| Month::try_from(m).ok())
        .map(|m| m.name())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHEET: &str = "date,url,title,source,star,scoring,active\n\
        2025-11-01,https://example.com/a,Sudoku,Book,yes,\"\"\"10 pts\n5 bonus\"\"\",\n\
        2025-11-02,https://example.com/b,,Web,,,TRUE\n\
        2025-11-03,https://example.com/c,Gone,,,,false\n\
        2025-11-04,https://example.com/d,Zero,,,,0\n\
        ,https://example.com/e,No date,,,,\n\
        2025-12-25,,Xmas,,,,\n";

    #[test]
    fn test_from_table_filters() {
        let calendar = PuzzleCalendar::parse(SHEET);
        let keys: Vec<_> = calendar.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["2025-11-01", "2025-11-02", "2025-12-25"]);
    }

    #[test]
    fn test_puzzle_fields() {
        let calendar = PuzzleCalendar::parse(SHEET);
        let puzzle = calendar.get("2025-11-01").unwrap();
        assert_eq!(puzzle.url, "https://example.com/a");
        assert_eq!(puzzle.source, "Book");
        assert!(puzzle.has_star());
        assert_eq!(puzzle.scoring, "\"10 pts\n5 bonus\"");
        assert_eq!(puzzle.cleaned_scoring(), "10 pts\n5 bonus");
    }

    #[test]
    fn test_label_and_link() {
        let calendar = PuzzleCalendar::parse(SHEET);
        let untitled = calendar.get("2025-11-02").unwrap();
        assert_eq!(untitled.label(), "Puzzle available");
        assert!(!untitled.has_star());
        assert!(!calendar.get("2025-12-25").unwrap().is_linked());
    }

    #[test]
    fn test_active_case_insensitive() {
        let calendar = PuzzleCalendar::parse("date,active\n2025-01-01,False\n2025-01-02,no\n");
        assert!(calendar.get("2025-01-01").is_none());
        assert!(calendar.get("2025-01-02").is_some());
    }

    #[test]
    fn test_later_row_wins() {
        let calendar = PuzzleCalendar::parse("date,title\n2025-01-01,First\n2025-01-01,Second\n");
        assert_eq!(calendar.len(), 1);
        assert_eq!(calendar.get("2025-01-01").unwrap().title, "Second");
    }

    #[test]
    fn test_missing_star_column_is_unstarred() {
        let calendar = PuzzleCalendar::parse("date,url\n2025-01-01,https://example.com/x\n");
        assert!(!calendar.get("2025-01-01").unwrap().has_star());
    }

    #[test]
    fn test_header_only_is_empty() {
        assert!(PuzzleCalendar::parse("date,url\n").is_empty());
        assert!(PuzzleCalendar::parse("").is_empty());
    }

    #[test]
    fn test_get_date_and_month() {
        let calendar = PuzzleCalendar::parse(SHEET);
        let day = NaiveDate::from_ymd_opt(2025, 11, 2).unwrap();
        assert_eq!(calendar.get_date(day).unwrap().source, "Web");

        let november: Vec<_> = calendar.in_month(2025, 11).into_iter().map(|(d, _)| d.day()).collect();
        assert_eq!(november, [1, 2]);
        assert_eq!(calendar.in_month(2025, 12).len(), 1);
        assert!(calendar.in_month(2025, 13).is_empty());
    }

    #[test]
    fn test_format_date_key_pads() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 7).unwrap();
        assert_eq!(format_date_key(date), "2025-03-07");
    }

    #[test]
    fn test_month_name() {
        assert_eq!(month_name(1), Some("January"));
        assert_eq!(month_name(12), Some("December"));
        assert_eq!(month_name(0), None);
        assert_eq!(month_name(13), None);
    }
}
