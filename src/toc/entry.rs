//! A single table-of-contents line

use std::fmt;
use std::num::ParseIntError;
use crate::error::ParseError;

/// One `label page` line of a table of contents
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    label: String,
    page: i64,
}

impl Entry {
    /// Parse one raw line, terminator included
    ///
    /// Returns `Ok(None)` for blank or whitespace-only lines. The page number
    /// is the last token after splitting on the literal space character;
    /// everything before it, spaces included, is the label. Tabs are not
    /// separators, but whitespace around the page token is ignored and
    /// single underscores may group its digits (`1_000`).
    ///
    /// # Example
    ///
    /// ```
    /// use toc_offset::toc::Entry;
    ///
    /// let entry = Entry::parse_line("Chapter 1 5\n").unwrap().unwrap();
    /// assert_eq!(entry.label(), "Chapter 1");
    /// assert_eq!(entry.page(), 5);
    /// ```
    pub fn parse_line(line: &str) -> Result<Option<Self>, ParseError> {
        let trimmed = line.trim_end();
        if trimmed.is_empty() {
            return Ok(None);
        }

        let Some((label, page)) = trimmed.rsplit_once(' ') else {
            return Err(ParseError::MissingPageNumber { line: line.to_string() });
        };

        let page = parse_page(page).map_err(|source| ParseError::InvalidPageNumber {
            line: line.to_string(),
            source,
        })?;

        if label.is_empty() {
            return Err(ParseError::EmptyLabel { line: line.to_string() });
        }

        Ok(Some(Self {
            label: label.to_string(),
            page,
        }))
    }

    /// Heading text
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Page number as written in the input
    pub fn page(&self) -> i64 {
        self.page
    }

    /// Render as an output line with `offset` added to the page
    ///
    /// The sum is taken in `i128` so it is exact for any `i64` inputs.
    /// Zero and negative results are written as-is.
    pub fn format(&self, offset: i64) -> String {
        let page = i128::from(self.page) + i128::from(offset);
        format!("{} {}\n", self.label, page)
    }
}

/// Parse a page token: optional sign, digits optionally grouped by single `_`
fn parse_page(token: &str) -> Result<i64, ParseIntError> {
    let token = token.trim();
    let unsigned = token.strip_prefix(|c: char| c == '+' || c == '-').unwrap_or(token);
    if unsigned.contains('_') && unsigned.split('_').all(|group| !group.is_empty()) {
        return token.replace('_', "").parse();
    }
    token.parse()
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.label, self.page)
    }
}
