//! Markdown pipe-table rendering

use crate::core::align::{normalize_alignments, AlignSpec};
use crate::core::format::format_cell;
use crate::core::validate::validate;
use crate::utils::error::RenderResult;

/// Render `table` as a Markdown pipe-table.
///
/// The first row is the header; the second output line carries the
/// alignment markers; the remaining lines are the data rows with the cell
/// formatter applied. Lines are joined with single newlines and there is no
/// trailing newline.
///
/// Fails fast on an empty or ragged table and on any unknown alignment tag;
/// no partial output is ever produced. An alignment spec shorter than the
/// column count falls back to the left marker for the uncovered columns,
/// and excess entries are ignored.
pub fn generate_md_table(
    table: &[Vec<String>],
    alignments: Option<&AlignSpec>,
) -> RenderResult<String> {
    validate(table)?;

    let header = &table[0];
    let num_cols = header.len();

    let resolved = match alignments {
        Some(spec) => normalize_alignments(spec)?,
        None => Vec::new(),
    };
    let markers: Vec<&str> = (0..num_cols)
        .map(|col| resolved.get(col).copied().unwrap_or_default().marker())
        .collect();

    let mut lines = Vec::with_capacity(table.len() + 1);
    lines.push(pipe_row(header.iter().map(String::as_str)));
    lines.push(pipe_row(markers.iter().copied()));

    for row in &table[1..] {
        let mut cells: Vec<String> = row.iter().map(|cell| format_cell(cell)).collect();
        // Post-validation every row already has num_cols cells
        while cells.len() < num_cols {
            cells.push(String::new());
        }
        lines.push(pipe_row(cells.iter().map(String::as_str)));
    }

    Ok(lines.join("\n"))
}

fn pipe_row<'a>(cells: impl Iterator<Item = &'a str>) -> String {
    format!("| {} |", cells.collect::<Vec<_>>().join(" | "))
}
