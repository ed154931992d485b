//! Table of contents offset CLI tool
//!
//! A command-line tool for shifting the page numbers of a table-of-contents file.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::process;

use toc_offset::toc::{apply_offset, OffsetOptions};
use toc_offset::Error;

/// Output a new table of contents file with page numbers offset.
///
/// Documents often start with pages that the table of contents does not
/// count (covers, roman-numeral front matter). This adds an offset to the
/// page numbers so they match the physical pages of the file.
#[derive(Parser)]
#[command(name = "toc-offset")]
#[command(author, version, about, long_about)]
#[command(after_help = "EXAMPLES:
    # Shift every entry by 12 pages, writing toc_out.txt
    toc-offset -n 12 toc.txt

    # Leave the first two entries alone, shift the rest back by 3
    toc-offset -s 2 -n -3 toc.txt

    # Choose the output file
    toc-offset -n 12 -o shifted.txt toc.txt")]
struct Cli {
    /// Table-of-contents file, one `<label> <page>` entry per line
    filename: PathBuf,

    /// Index of the first entry the offset applies to. Empty lines are disregarded.
    #[arg(short, long, default_value_t = 0)]
    start: usize,

    /// Number of pages to offset page numbers by between input and output
    #[arg(short = 'n', long, allow_negative_numbers = true)]
    offset: i64,

    /// Output file path (default: <name>_out.<ext> next to the input)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    if !cli.filename.exists() {
        return Err(Error::FileNotFound(cli.filename).into());
    }

    let options = OffsetOptions {
        input_path: cli.filename,
        output_path: cli.output,
        start: cli.start,
        offset: cli.offset,
    };

    let report = apply_offset(&options)
        .with_context(|| format!("Failed to offset {}", options.input_path.display()))?;

    println!("{}", report);
    println!("{} successfully written.", report.output_path.display());

    Ok(())
}
