//! JSON export of the text grid.

use super::grid::to_text;
use super::types::TextRow;
use crate::console_format::ColumnWidths;
use crate::error::Result;
use crate::types::Table;
use log::debug;
use std::io::Write;

/// Write every table's grid as a pretty-printed JSON array of arrays.
///
/// Widths are computed over all tables the same way the text renderer does,
/// but only the cells are serialized.
pub fn format_json<W: Write>(writer: &mut W, tables: &[Table]) -> Result<()> {
    let grids: Vec<Vec<TextRow>> = tables.iter().map(to_text).collect();
    let widths = ColumnWidths::compute(&grids);
    debug!("JSON grid: {} tables, column widths {:?}", grids.len(), widths.as_slice());

    serde_json::to_writer_pretty(&mut *writer, &grids)?;
    writeln!(writer)?;
    Ok(())
}

#[cfg(test)]
#[path = "export_test.rs"]
mod export_test;
