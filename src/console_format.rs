/// Console formatting module - Pure rendering concerns
///
/// This module handles text grid layout:
/// - Column width computation shared across tables
/// - Left and right padding
/// - Writing aligned grids
///
/// It accepts pre-built `TextRow` grids from the report module and renders
/// them to any `std::io::Write` destination (stdout, string buffers, files).

use crate::report::TextRow;
use std::io::{self, Write};

/// Separator printed between adjacent columns
pub const COLUMN_GAP: &str = "  ";

/// Display width of a cell, counted in codepoints.
pub fn display_width(s: &str) -> usize {
    s.chars().count()
}

/// Pad `s` on the right to `width` codepoints.
pub fn pad_right(s: &str, width: usize) -> String {
    let w = display_width(s);
    if w >= width { s.to_string() } else { format!("{}{}", s, " ".repeat(width - w)) }
}

/// Pad `s` on the left to `width` codepoints.
pub fn pad_left(s: &str, width: usize) -> String {
    let w = display_width(s);
    if w >= width { s.to_string() } else { format!("{}{}", " ".repeat(width - w), s) }
}

/// Maximum cell width per column index, shared by every table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnWidths(Vec<usize>);

impl ColumnWidths {
    /// Compute widths over all rows of all tables, skipping separator rows.
    pub fn compute(tables: &[Vec<TextRow>]) -> Self {
        let mut widths: Vec<usize> = Vec::new();
        for row in tables.iter().flatten() {
            if row.is_separator() {
                continue;
            }
            for (i, cell) in row.cols.iter().enumerate() {
                if widths.len() <= i {
                    widths.resize(i + 1, 0);
                }
                widths[i] = widths[i].max(display_width(cell));
            }
        }
        ColumnWidths(widths)
    }

    /// Width of column `i`; columns never seen have width 0.
    pub fn get(&self, i: usize) -> usize {
        self.0.get(i).copied().unwrap_or(0)
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }
}

/// Writer for aligned text grids
pub struct TableWriter<W: Write> {
    writer: W,
}

impl<W: Write> TableWriter<W> {
    /// Create a new table writer
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Write one grid. The first row is the header.
    pub fn write_grid(&mut self, rows: &[TextRow], widths: &ColumnWidths) -> io::Result<()> {
        let mut rows = rows.iter();
        if let Some(header) = rows.next() {
            self.write_header(header, widths)?;
        }
        for row in rows {
            self.write_row(row, widths)?;
        }
        Ok(())
    }

    /// Write a blank line between grids
    pub fn write_blank_line(&mut self) -> io::Result<()> {
        writeln!(self.writer)
    }

    /// Header cells are left-aligned; the last one is not padded.
    fn write_header(&mut self, row: &TextRow, widths: &ColumnWidths) -> io::Result<()> {
        let last = row.cols.len().saturating_sub(1);
        for (i, cell) in row.cols.iter().enumerate() {
            if i > 0 {
                write!(self.writer, "{}", COLUMN_GAP)?;
            }
            if i == last {
                write!(self.writer, "{}", cell)?;
            } else {
                write!(self.writer, "{}", pad_right(cell, widths.get(i)))?;
            }
        }
        writeln!(self.writer)
    }

    /// Data cells are right-aligned except the name column and a trailing note.
    fn write_row(&mut self, row: &TextRow, widths: &ColumnWidths) -> io::Result<()> {
        if row.is_separator() {
            return writeln!(self.writer, "{}", row.cols[0]);
        }
        let last = row.cols.len().saturating_sub(1);
        for (i, cell) in row.cols.iter().enumerate() {
            if i == 0 {
                write!(self.writer, "{}", pad_right(cell, widths.get(i)))?;
            } else if i == last && cell.starts_with('(') {
                write!(self.writer, "{}{}", COLUMN_GAP, cell)?;
            } else {
                write!(self.writer, "{}{}", COLUMN_GAP, pad_left(cell, widths.get(i)))?;
            }
        }
        writeln!(self.writer)
    }

    /// Flush and hand back the underlying writer
    pub fn into_inner(mut self) -> io::Result<W> {
        self.writer.flush()?;
        Ok(self.writer)
    }
}

#[cfg(test)]
#[path = "console_format_test.rs"]
mod console_format_test;
