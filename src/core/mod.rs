//! Core table rendering modules
//!
//! This module contains the rendering engine:
//! - `align`: alignment tag parsing and Markdown marker mapping
//! - `format`: per-cell display formatting
//! - `validate`: table shape validation
//! - `markdown`: Markdown pipe-table renderer
//! - `preview`: terminal box preview renderer

pub mod align;
pub mod format;
pub mod markdown;
pub mod preview;
pub mod validate;

pub use align::{normalize_alignments, AlignSpec, Alignment};
pub use format::format_cell;
pub use markdown::generate_md_table;
pub use preview::preview_table;
pub use validate::validate;
