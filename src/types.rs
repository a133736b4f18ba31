//! Header-keyed view of a parsed sheet

use crate::csv::CsvParser;
use indexmap::IndexMap;

/// One data row keyed by column header
///
/// Values are trimmed. Looking up a header the row does not have yields an
/// empty string, which is how short rows are reconciled with the header row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Record {
    values: IndexMap<String, String>,
}

impl Record {
    /// Get the value for a header, or `""` when absent
    pub fn get(&self, header: &str) -> &str {
        self.values.get(header).map(String::as_str).unwrap_or("")
    }

    /// Whether the header is present in this record
    pub fn contains(&self, header: &str) -> bool {
        self.values.contains_key(header)
    }

    /// Iterate `(header, value)` pairs in column order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of distinct headers in the record
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the record has no values
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Record {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// A sheet whose first row names the columns
///
/// # Examples
///
/// ```
/// use sheetfeed::Table;
///
/// let table = Table::parse("date , title\n2025-11-01, Kakuro \n2025-11-02\n");
/// assert_eq!(table.headers(), ["date", "title"]);
/// assert_eq!(table.records()[0].get("title"), "Kakuro");
/// assert_eq!(table.records()[1].get("title"), "");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Table {
    headers: Vec<String>,
    records: Vec<Record>,
}

impl Table {
    /// Parse CSV text and map it onto its header row
    ///
    /// Surrounding whitespace of the whole payload is trimmed first, so a
    /// sheet export ending in blank padding does not produce stray rows.
    pub fn parse(text: &str) -> Self {
        Self::from_rows(CsvParser::default().parse(text.trim()))
    }

    /// Build a table from parsed rows
    ///
    /// Cells are zipped against headers by position. Missing cells become
    /// `""`, cells beyond the last header are ignored. When a header repeats,
    /// the later column's value wins.
    pub fn from_rows(rows: Vec<Vec<String>>) -> Self {
        let mut rows = rows.into_iter();
        let headers: Vec<String> = match rows.next() {
            Some(first) => first.iter().map(|h| h.trim().to_string()).collect(),
            None => return Table::default(),
        };

        let records = rows
            .filter(|row| !row.is_empty())
            .map(|row| {
                headers
                    .iter()
                    .enumerate()
                    .map(|(idx, h)| {
                        let value = row.get(idx).map(|c| c.trim()).unwrap_or("");
                        (h.clone(), value.to_string())
                    })
                    .collect()
            })
            .collect();

        Table { headers, records }
    }

    /// Trimmed column headers, in sheet order
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Data rows (header row excluded)
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Number of data rows
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the table has no data rows
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
