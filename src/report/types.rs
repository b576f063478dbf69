//! Text grid types for the rendering model.

use serde::{Deserialize, Serialize};

/// A row of printed text columns.
///
/// Serializes as `{"Cols": [...]}`, which is the JSON report's row shape.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextRow {
    #[serde(rename = "Cols")]
    pub cols: Vec<String>,
}

impl TextRow {
    pub fn new<I, S>(cols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        TextRow { cols: cols.into_iter().map(Into::into).collect() }
    }

    pub fn push(&mut self, col: impl Into<String>) {
        self.cols.push(col.into());
    }

    /// Drop trailing empty cells so short rows don't force padding.
    pub fn trim(&mut self) {
        while self.cols.last().is_some_and(|c| c.is_empty()) {
            self.cols.pop();
        }
    }

    /// Single-cell rows are group separators and are not column-aligned.
    pub fn is_separator(&self) -> bool {
        self.cols.len() == 1
    }
}
