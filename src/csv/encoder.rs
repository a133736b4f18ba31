//! CSV encoding that reads back through [`CsvParser`](super::CsvParser)
//!
//! Fields are only quoted when they have to be, so plain sheets serialize to
//! plain text.

/// CSV encoder for writing properly quoted CSV text
#[derive(Debug, Clone, Copy)]
pub struct CsvEncoder {
    delimiter: char,
    quote_char: char,
}

impl Default for CsvEncoder {
    fn default() -> Self {
        Self::new(',', '"')
    }
}

impl CsvEncoder {
    /// Create a new CSV encoder with custom delimiter and quote character
    pub fn new(delimiter: char, quote_char: char) -> Self {
        Self {
            delimiter,
            quote_char,
        }
    }

    /// Encode one row into buffer, without a line ending
    pub fn encode_row<S: AsRef<str>>(&self, fields: &[S], buffer: &mut Vec<u8>) {
        let mut line = String::new();
        self.write_row(fields, &mut line);
        buffer.extend_from_slice(line.as_bytes());
    }

    /// Encode rows joined by `\n`, with no trailing line ending
    ///
    /// # Examples
    ///
    /// ```
    /// use sheetfeed::csv::CsvEncoder;
    ///
    /// let text = CsvEncoder::default().encode_rows(&[vec!["a", "b,c"], vec!["d", "e"]]);
    /// assert_eq!(text, "a,\"b,c\"\nd,e");
    /// ```
    pub fn encode_rows<R, S>(&self, rows: &[R]) -> String
    where
        R: AsRef<[S]>,
        S: AsRef<str>,
    {
        let mut out = String::with_capacity(rows.len() * 32);
        for (i, row) in rows.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            let fields: &[S] = row.as_ref();
            self.write_row(fields, &mut out);
        }
        out
    }

    fn write_row<S: AsRef<str>>(&self, fields: &[S], out: &mut String) {
        for (i, field) in fields.iter().enumerate() {
            if i > 0 {
                out.push(self.delimiter);
            }
            self.write_field(field.as_ref(), out);
        }
    }

    fn write_field(&self, field: &str, out: &mut String) {
        if !self.needs_quoting(field) {
            out.push_str(field);
            return;
        }

        out.push(self.quote_char);
        for ch in field.chars() {
            if ch == self.quote_char {
                out.push(ch);
            }
            out.push(ch);
        }
        out.push(self.quote_char);
    }

    fn needs_quoting(&self, field: &str) -> bool {
        field
            .chars()
            .any(|c| c == self.delimiter || c == self.quote_char || c == '\n' || c == '\r')
    }
}
