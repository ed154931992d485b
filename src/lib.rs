//! Table of Contents Offset Library
//!
//! Shifts the page numbers of a plain-text table of contents by a fixed
//! amount. Useful when a document has front matter (roman-numeral pages,
//! covers) that the printed page numbers do not count.
//!
//! Each non-blank line of the input has the form `<label> <page>`; blank
//! lines are dropped. Entries at or after a start position (counted among
//! non-blank entries only) get the offset added to their page.
//!
//! # Example
//!
//! ```no_run
//! use toc_offset::toc::{apply_offset, OffsetOptions};
//! use std::path::PathBuf;
//!
//! let options = OffsetOptions {
//!     input_path: PathBuf::from("toc.txt"),
//!     output_path: None,
//!     start: 1,
//!     offset: 10,
//! };
//!
//! let report = apply_offset(&options).expect("Failed to offset contents");
//! println!("{}", report);
//! ```

pub mod error;
pub mod toc;

// Re-export commonly used items
pub use error::{Error, ParseError, Result};
