//! Error types for the table-of-contents offset library

use std::num::ParseIntError;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Failure to interpret a single non-blank line as `label page`
///
/// Every variant carries the raw line as it was read, terminator included.
#[derive(Error, Debug)]
pub enum ParseError {
    /// Line has content but no space-delimited page number
    #[error("Found line without page number: {}", .line.trim_end())]
    MissingPageNumber { line: String },

    /// Last token is not a base-10 integer
    #[error("Unable to parse page number from string: {line:?}")]
    InvalidPageNumber {
        line: String,
        #[source]
        source: ParseIntError,
    },

    /// Nothing precedes the page number
    #[error("Found line without label: {}", .line.trim_end())]
    EmptyLabel { line: String },
}

/// Main error type for the library
#[derive(Error, Debug)]
pub enum Error {
    /// A line of the input could not be parsed
    #[error("Parse error on line {line_number}")]
    Parse {
        /// 1-based line number in the input file
        line_number: usize,
        #[source]
        source: ParseError,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// File not found
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),
}
