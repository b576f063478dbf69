//! Report generation module - turns computed tables into output bytes.
//!
//! This module handles:
//! - Laying tables out as text grids (`grid`)
//! - Diff-only filtering
//! - Text, JSON and HTML rendering
//!
//! Column layout helpers live in the console_format module.
//!
//! # Module Organization
//!
//! - `types` - `TextRow`, the grid row type
//! - `grid` - RowFormatter and GridBuilder
//! - `filter` - DiffFilter
//! - `export` - JSON output
//! - `table` - aligned text output
//! - `html` - HTML output

mod export;
mod filter;
mod grid;
mod html;
mod table;
mod types;

pub use export::format_json;
pub use filter::{NO_DIFFERENCES, filter_diff};
pub use grid::{format_metrics, to_text};
pub use html::{HTML_STYLE, escape_html, format_html};
pub use table::format_text;
pub use types::TextRow;

use crate::config::OutputFormat;
use crate::error::Result;
use crate::types::Table;
use std::io::Write;

/// Render `tables` in the selected format.
///
/// `None` (an unrecognized `-output` value) renders nothing.
pub fn render<W: Write>(writer: &mut W, format: Option<OutputFormat>, tables: &[Table]) -> Result<()> {
    match format {
        Some(OutputFormat::Text) => format_text(&mut *writer, tables)?,
        Some(OutputFormat::Json) => format_json(writer, tables)?,
        Some(OutputFormat::Html) => format_html(&mut *writer, tables)?,
        None => {}
    }
    Ok(())
}
