//! Diff-only mode: keep only rows whose change is significant.

use crate::types::Table;
use log::debug;

/// Printed by the text renderer when the diff filter removed every table.
pub const NO_DIFFERENCES: &str = "No significant differences in benchmarks\n";

/// Remove rows with `change == 0`, then tables left without rows.
///
/// Order of surviving tables and rows is preserved.
pub fn filter_diff(tables: &mut Vec<Table>) {
    tables.retain_mut(|table| {
        let before = table.rows.len();
        table.rows.retain(|row| row.change != 0);
        debug!("diff filter: {} kept {}/{} rows", table.metric, table.rows.len(), before);
        !table.rows.is_empty()
    });
}

#[cfg(test)]
#[path = "filter_test.rs"]
mod filter_test;
