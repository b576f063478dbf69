//! Plain-text rendering of tables as aligned columns.

use super::grid::to_text;
use super::types::TextRow;
use crate::console_format::{ColumnWidths, TableWriter};
use crate::types::Table;
use std::io::{self, Write};

/// Render all tables with one shared set of column widths.
pub fn format_text<W: Write>(writer: W, tables: &[Table]) -> io::Result<()> {
    let grids: Vec<Vec<TextRow>> = tables.iter().map(to_text).collect();
    let widths = ColumnWidths::compute(&grids);

    let mut out = TableWriter::new(writer);
    for (i, grid) in grids.iter().enumerate() {
        if i > 0 {
            out.write_blank_line()?;
        }
        out.write_grid(grid, &widths)?;
    }
    out.into_inner()?;
    Ok(())
}

#[cfg(test)]
#[path = "table_test.rs"]
mod table_test;
