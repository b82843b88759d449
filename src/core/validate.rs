//! Table shape validation
//!
//! Used by the Markdown path only. The preview renderer skips this check
//! and pads ragged rows instead.

use crate::utils::error::{RenderError, RenderResult};

/// Check that `table` is non-empty and rectangular.
///
/// The first row is the authoritative column count; every later row must
/// match it. Fails with [`RenderError::EmptyTable`] on zero rows and
/// [`RenderError::ColumnMismatch`] (naming the row index and both counts)
/// on the first ragged row. No repair or padding happens here.
pub fn validate(table: &[Vec<String>]) -> RenderResult<()> {
    let header = table.first().ok_or(RenderError::EmptyTable)?;
    let expected = header.len();

    for (index, row) in table.iter().enumerate().skip(1) {
        if row.len() != expected {
            return Err(RenderError::column_mismatch(index, expected, row.len()));
        }
    }

    Ok(())
}
