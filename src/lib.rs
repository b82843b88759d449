//! # mdtab
//!
//! Generate Markdown pipe-tables from CSV data, with a fixed-width terminal
//! preview.
//!
//! ## Features
//!
//! - **Markdown Output**: Pipe-tables with per-column alignment markers
//! - **Terminal Preview**: Box-drawn fixed-width rendering for a quick look
//! - **Cell Formatting**: Underscore-separated numbers become comma-grouped
//! - **Strict Validation**: Ragged tables and unknown alignment tags fail
//!   fast on the Markdown path
//! - **CSV Input**: Files or stdin via the `csv` crate, quoting included
//!
//! ## Usage Examples
//!
//! ### Rendering a table
//!
//! ```rust
//! use mdtab::generate_md_table;
//!
//! let table = vec![
//!     vec!["Name".to_string(), "Age".to_string()],
//!     vec!["Alice".to_string(), "30".to_string()],
//! ];
//! let md = generate_md_table(&table, None).unwrap();
//! assert_eq!(md, "| Name | Age |\n| :--- | :--- |\n| Alice | 30 |");
//! ```
//!
//! ### Alignment control
//!
//! ```rust
//! use mdtab::{generate_md_table, AlignSpec};
//!
//! let table = vec![
//!     vec!["Item".to_string(), "Price".to_string()],
//!     vec!["Tea".to_string(), "1_250".to_string()],
//! ];
//! let spec = AlignSpec::from("center,right");
//! let md = generate_md_table(&table, Some(&spec)).unwrap();
//! assert!(md.contains("| :---: | ---: |"));
//! assert!(md.contains("| Tea | 1,250 |"));
//! ```

/// Core table rendering modules
pub mod core;

/// Utility modules
pub mod utils;

// Re-export the rendering engine
pub use core::align::{normalize_alignments, AlignSpec, Alignment};
pub use core::format::format_cell;
pub use core::markdown::generate_md_table;
pub use core::preview::preview_table;
pub use core::validate::validate;

// Re-export utilities
pub use utils::error::{RenderError, RenderResult};
pub use utils::io::{parse_csv, read_csv, write_output, STDIN_PATH};

/// Render CSV text as a Markdown pipe-table
pub fn csv_to_markdown(input: &str, alignments: Option<&AlignSpec>) -> RenderResult<String> {
    let table = parse_csv(input)?;
    generate_md_table(&table, alignments)
}

/// Render CSV text as a box-drawn terminal preview
pub fn csv_to_preview(input: &str, alignments: Option<&AlignSpec>) -> RenderResult<String> {
    let table = parse_csv(input)?;
    preview_table(&table, alignments)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csv_to_markdown_basic() {
        let md = csv_to_markdown("Name,Age\nAlice,30", None).unwrap();
        assert_eq!(md, "| Name | Age |\n| :--- | :--- |\n| Alice | 30 |");
    }

    #[test]
    fn test_csv_to_markdown_formats_cells() {
        let md = csv_to_markdown("Balance\n6_692_587.586946 XRP", None).unwrap();
        assert!(md.contains("| 6,692,587.586946 XRP |"));
    }

    #[test]
    fn test_csv_to_markdown_ragged_rejected() {
        let err = csv_to_markdown("a,b\n1", None).unwrap_err();
        assert!(matches!(err, RenderError::ColumnMismatch { .. }));
    }

    #[test]
    fn test_csv_to_preview_basic() {
        let preview = csv_to_preview("Name,Score\nAlice,90", None).unwrap();
        assert!(preview.starts_with("+-------+-------+"));
        assert!(preview.contains("| Alice | 90    |"));
    }

    #[test]
    fn test_csv_to_preview_tolerates_ragged() {
        let preview = csv_to_preview("a,b\n1", None).unwrap();
        assert!(preview.contains("| 1 |"));
    }

    #[test]
    fn test_empty_input_is_empty_table() {
        assert!(matches!(
            csv_to_markdown("", None),
            Err(RenderError::EmptyTable)
        ));
        assert!(matches!(
            csv_to_preview("", None),
            Err(RenderError::EmptyTable)
        ));
    }
}
