//! CSV parsing with RFC 4180-like quoting over whole documents
//!
//! Quoted fields may contain delimiters, doubled quotes and line breaks.
//! The parser is lenient: malformed quoting never fails, an unterminated
//! quoted field simply runs to the end of the input.

/// Quoting state while scanning a document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Unquoted,
    Quoted,
}

/// CSV parser for reading CSV documents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CsvParser {
    delimiter: char,
    quote_char: char,
}

impl Default for CsvParser {
    fn default() -> Self {
        Self::new(',', '"')
    }
}

impl CsvParser {
    /// Create a new CSV parser with custom delimiter and quote character
    pub fn new(delimiter: char, quote_char: char) -> Self {
        Self {
            delimiter,
            quote_char,
        }
    }

    /// Parse a whole CSV document into rows of fields
    ///
    /// Line breaks may be `\n`, `\r\n` or a lone `\r`. Blank lines are
    /// skipped, while a final row without a trailing line break is kept.
    /// Fields are returned exactly as written: no trimming, no padding.
    ///
    /// # Examples
    ///
    /// ```
    /// use sheetfeed::csv::CsvParser;
    ///
    /// let rows = CsvParser::default().parse("date,title\n2025-11-01,\"Hello, world\"\n");
    /// assert_eq!(rows, vec![vec!["date", "title"], vec!["2025-11-01", "Hello, world"]]);
    /// ```
    pub fn parse(&self, text: &str) -> Vec<Vec<String>> {
        let mut scan = Scan::new();
        let mut chars = text.chars().peekable();

        while let Some(ch) = chars.next() {
            match scan.state {
                State::Quoted if ch == self.quote_char => {
                    // Doubled quote is a literal quote
                    if chars.peek() == Some(&self.quote_char) {
                        scan.field.push(ch);
                        chars.next();
                    } else {
                        scan.state = State::Unquoted;
                    }
                }
                State::Quoted => scan.field.push(ch),
                State::Unquoted if ch == self.quote_char => scan.state = State::Quoted,
                State::Unquoted if ch == self.delimiter => scan.end_field(),
                State::Unquoted if ch == '\r' || ch == '\n' => {
                    if ch == '\r' && chars.peek() == Some(&'\n') {
                        chars.next();
                    }
                    scan.end_row();
                }
                State::Unquoted => scan.field.push(ch),
            }
        }

        scan.finish()
    }
}

/// Buffers for a single `parse` call
struct Scan {
    state: State,
    field: String,
    row: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Scan {
    fn new() -> Self {
        Self {
            state: State::Unquoted,
            field: String::new(),
            row: Vec::new(),
            rows: Vec::new(),
        }
    }

    fn end_field(&mut self) {
        self.row.push(std::mem::take(&mut self.field));
    }

    fn end_row(&mut self) {
        self.end_field();
        let row = std::mem::take(&mut self.row);
        // A lone empty field is a blank line
        if row.len() > 1 || !row[0].is_empty() {
            self.rows.push(row);
        }
    }

    fn finish(mut self) -> Vec<Vec<String>> {
        if !self.field.is_empty() || !self.row.is_empty() {
            self.end_field();
            self.rows.push(std::mem::take(&mut self.row));
        }
        self.rows
    }
}

/// Parse a CSV document with the default `,` delimiter and `"` quote
///
/// # Examples
///
/// ```
/// use sheetfeed::csv::parse_csv;
///
/// assert_eq!(parse_csv("a,b\n\nc,d\n"), vec![vec!["a", "b"], vec!["c", "d"]]);
/// assert!(parse_csv("").is_empty());
/// ```
pub fn parse_csv(text: &str) -> Vec<Vec<String>> {
    CsvParser::default().parse(text)
}
