//! Table-of-contents parsing and page offsetting

pub mod entry;
pub mod offset;

// Re-export commonly used items
pub use entry::Entry;
pub use offset::{apply_offset, output_path_for, OffsetOptions, OffsetReport, TableOfContents};
