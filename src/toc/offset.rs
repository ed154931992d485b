//! Offsetting a whole table-of-contents file

use std::ffi::OsString;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use log::{debug, trace};
use crate::error::{Error, Result};
use super::entry::Entry;

/// Options for offsetting a table-of-contents file
#[derive(Debug, Clone)]
pub struct OffsetOptions {
    /// Table-of-contents file to read
    pub input_path: PathBuf,
    /// Where to write the result; `None` derives `<stem>_out<.ext>` next to the input
    pub output_path: Option<PathBuf>,
    /// Position among non-blank entries where offsetting begins (0-based)
    pub start: usize,
    /// Amount added to each offset page number
    pub offset: i64,
}

/// Outcome of a successful run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OffsetReport {
    /// Number of non-blank entries found
    pub bookmark_count: usize,
    /// Number of raw lines read, blank ones included
    pub total_lines: usize,
    /// File that was written
    pub output_path: PathBuf,
}

impl fmt::Display for OffsetReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Found {} bookmarks out of {} lines.",
            self.bookmark_count, self.total_lines
        )
    }
}

/// Parsed table of contents
///
/// Blank lines are counted in `total_lines` but hold no entry, so positions
/// in `entries` are positions among non-blank lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableOfContents {
    entries: Vec<Entry>,
    total_lines: usize,
}

impl TableOfContents {
    /// Parse the full text of a table-of-contents file
    ///
    /// Fails on the first malformed line, reporting its 1-based line number.
    pub fn parse(content: &str) -> Result<Self> {
        let mut entries = Vec::new();
        let mut total_lines = 0;

        for (index, line) in lines_with_terminators(content).enumerate() {
            total_lines += 1;
            let parsed = Entry::parse_line(line).map_err(|source| Error::Parse {
                line_number: index + 1,
                source,
            })?;
            if let Some(entry) = parsed {
                trace!("line {}: {:?} -> page {}", index + 1, entry.label(), entry.page());
                entries.push(entry);
            }
        }

        debug!("Parsed {} entries from {} lines", entries.len(), total_lines);

        Ok(Self { entries, total_lines })
    }

    /// Non-blank entries in input order
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Number of raw lines parsed
    pub fn total_lines(&self) -> usize {
        self.total_lines
    }

    /// Render every entry, adding `offset` to those at position `start` or later
    pub fn render(&self, start: usize, offset: i64) -> String {
        self.entries
            .iter()
            .enumerate()
            .map(|(i, entry)| if i >= start { entry.format(offset) } else { entry.format(0) })
            .collect()
    }
}

/// Split after each `\n`, `\r\n` or lone `\r`, keeping the terminators
///
/// A final line without terminator is still yielded; empty input yields nothing.
fn lines_with_terminators(content: &str) -> impl Iterator<Item = &str> {
    let mut rest = content;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        let end = match rest.find(|c: char| c == '\r' || c == '\n') {
            Some(i) if rest[i..].starts_with("\r\n") => i + 2,
            Some(i) => i + 1,
            None => rest.len(),
        };
        let (line, tail) = rest.split_at(end);
        rest = tail;
        Some(line)
    })
}

/// Default output path: `_out` inserted before the extension, same directory
///
/// `toc.txt` becomes `toc_out.txt`; `contents` becomes `contents_out`.
/// A trailing dot does not start an extension, so `toc.` becomes `toc._out`.
pub fn output_path_for(input: &Path) -> PathBuf {
    let (stem, ext) = match input.extension() {
        Some(ext) if ext.is_empty() => (input.file_name(), None),
        ext => (input.file_stem(), ext),
    };

    let mut name = stem.map(OsString::from).unwrap_or_default();
    name.push("_out");
    if let Some(ext) = ext {
        name.push(".");
        name.push(ext);
    }
    input.with_file_name(name)
}

/// Read, offset and write a table-of-contents file
///
/// The whole input is parsed before anything is written, so a malformed line
/// leaves no output file behind. An existing output file is overwritten.
///
/// # Example
///
/// ```no_run
/// use toc_offset::toc::{apply_offset, OffsetOptions};
/// use std::path::PathBuf;
///
/// let options = OffsetOptions {
///     input_path: PathBuf::from("contents.txt"),
///     output_path: None,
///     start: 0,
///     offset: 12,
/// };
///
/// let report = apply_offset(&options).expect("Failed to offset");
/// assert_eq!(report.output_path, PathBuf::from("contents_out.txt"));
/// ```
pub fn apply_offset(options: &OffsetOptions) -> Result<OffsetReport> {
    let content = fs::read_to_string(&options.input_path)?;
    let toc = TableOfContents::parse(&content)?;

    let output_path = options
        .output_path
        .clone()
        .unwrap_or_else(|| output_path_for(&options.input_path));

    debug!(
        "Offsetting entries from position {} by {}, writing {}",
        options.start,
        options.offset,
        output_path.display()
    );

    fs::write(&output_path, toc.render(options.start, options.offset))?;

    Ok(OffsetReport {
        bookmark_count: toc.entries().len(),
        total_lines: toc.total_lines(),
        output_path,
    })
}
