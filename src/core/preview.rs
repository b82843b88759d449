//! Terminal box preview rendering
//!
//! Produces a fixed-width ASCII table using `+`/`-`/`|` borders with each
//! column sized to its widest cell. Unlike the Markdown path this one is
//! tolerant: ragged rows are padded rather than rejected. The only hard
//! failure is an empty table, which has no header to size columns from.

use crate::core::align::{normalize_alignments, AlignSpec};
use crate::core::format::format_cell;
use crate::utils::error::{RenderError, RenderResult};

/// Render `table` as a box-drawn fixed-width preview.
///
/// Layout: rule, header row, rule, data rows, closing rule — no rules
/// between data rows. Every cell, header included, goes through the cell
/// formatter. A row shorter than the header renders blank padding for its
/// missing trailing columns; excess cells beyond the header width are
/// dropped.
///
/// An alignment spec is validated when present (unknown tags fail here just
/// as on the Markdown path) but does not change justification: cells are
/// always left-justified. Keep that asymmetry.
pub fn preview_table(
    table: &[Vec<String>],
    alignments: Option<&AlignSpec>,
) -> RenderResult<String> {
    let header = table.first().ok_or(RenderError::EmptyTable)?;

    if let Some(spec) = alignments {
        normalize_alignments(spec)?;
    }

    let num_cols = header.len();

    // The underscore substitution is length-preserving, so measuring after
    // formatting matches the widths of the raw cells.
    let header: Vec<String> = header.iter().map(|cell| format_cell(cell)).collect();
    let rows: Vec<Vec<String>> = table[1..]
        .iter()
        .map(|row| row.iter().map(|cell| format_cell(cell)).collect())
        .collect();

    let mut widths: Vec<usize> = header.iter().map(|cell| cell.chars().count()).collect();
    for row in &rows {
        for (col, cell) in row.iter().enumerate().take(num_cols) {
            widths[col] = widths[col].max(cell.chars().count());
        }
    }

    let rule = horizontal_rule(&widths);
    let mut lines = Vec::with_capacity(rows.len() + 4);
    lines.push(rule.clone());
    lines.push(render_row(&header, &widths));
    lines.push(rule.clone());
    for row in &rows {
        lines.push(render_row(row, &widths));
    }
    lines.push(rule);

    Ok(lines.join("\n"))
}

/// `+----+------+` separator sized to the column widths plus one space of
/// padding on each side.
fn horizontal_rule(widths: &[usize]) -> String {
    let segments: Vec<String> = widths.iter().map(|w| "-".repeat(w + 2)).collect();
    format!("+{}+", segments.join("+"))
}

fn render_row(row: &[String], widths: &[usize]) -> String {
    let padded: Vec<String> = widths
        .iter()
        .enumerate()
        .map(|(col, &width)| match row.get(col) {
            Some(cell) => format!("{:<width$}", cell),
            None => " ".repeat(width),
        })
        .collect();
    format!("| {} |", padded.join(" | "))
}
