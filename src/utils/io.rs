//! CSV input and output writing
//!
//! Reading goes through the `csv` crate with headers disabled so the first
//! row reaches the renderers as an ordinary row, and with flexible record
//! lengths so shape decisions stay with the rendering paths (the Markdown
//! renderer rejects ragged input, the preview pads it). `-` selects stdin.

use std::fs::File;
use std::io::{self, Write};

use crate::utils::error::RenderResult;

/// Path value that selects stdin instead of a file
pub const STDIN_PATH: &str = "-";

/// Read a CSV table from `path`, or from stdin when `path` is `-`.
///
/// Every record becomes one `Vec<String>` row, first record included. The
/// reader accepts rows of differing lengths; callers decide what a ragged
/// table means.
pub fn read_csv(path: &str) -> RenderResult<Vec<Vec<String>>> {
    if path == STDIN_PATH {
        read_rows(csv_reader(io::stdin()))
    } else {
        let file = File::open(path)?;
        read_rows(csv_reader(file))
    }
}

/// Parse CSV text already held in memory
pub fn parse_csv(input: &str) -> RenderResult<Vec<Vec<String>>> {
    read_rows(csv_reader(input.as_bytes()))
}

fn csv_reader<R: io::Read>(input: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(input)
}

fn read_rows<R: io::Read>(mut reader: csv::Reader<R>) -> RenderResult<Vec<Vec<String>>> {
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(|field| field.to_string()).collect());
    }
    Ok(rows)
}

/// Write `content` to `path`, or to stdout when `path` is `None`.
///
/// A trailing newline is appended either way; rendered tables carry none of
/// their own.
pub fn write_output(path: Option<&str>, content: &str) -> RenderResult<()> {
    match path {
        Some(path) => {
            let mut file = File::create(path)?;
            writeln!(file, "{}", content)?;
        }
        None => println!("{}", content),
    }
    Ok(())
}
