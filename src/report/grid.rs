//! Table to text grid conversion.
//!
//! The grid is the common layout behind the text and JSON renderers: a header
//! row, single-cell group separators, and one data row per benchmark.

use super::types::TextRow;
use crate::types::{Metrics, Table};

/// Cells shown for one configuration: (mean, unit, diff).
///
/// An empty unit means the configuration has no data, which renders as three
/// blank cells.
pub fn format_metrics(m: &Metrics) -> (String, String, String) {
    if !m.has_data() {
        return (String::new(), String::new(), String::new());
    }
    (format!("{:.0}", m.mean), m.unit.clone(), m.format_diff())
}

/// Header shape depends on how many configurations are compared.
fn header_row(table: &Table) -> TextRow {
    let metric = table.metric.as_str();
    match table.configs.len() {
        1 => TextRow::new(["name", "value", metric, "diff"]),
        2 => TextRow::new([
            "name".to_string(),
            "old value".to_string(),
            format!("old {}", metric),
            "diff".to_string(),
            "new value".to_string(),
            format!("new {}", metric),
            "diff".to_string(),
            "delta".to_string(),
            "significance".to_string(),
        ]),
        _ => {
            let mut row = TextRow::new([format!("name \\ {}", metric)]);
            for config in &table.configs {
                row.push(config.as_str());
            }
            row
        }
    }
}

/// Which group the previous data row belonged to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GroupState<'a> {
    NoGroupSeen,
    InGroup(&'a str),
}

impl<'a> GroupState<'a> {
    /// Move to `group`, returning true if a separator row is due.
    ///
    /// Entering the empty group first does not produce a separator.
    fn enter(&mut self, group: &'a str) -> bool {
        let due = match *self {
            GroupState::NoGroupSeen => !group.is_empty(),
            GroupState::InGroup(current) => current != group,
        };
        *self = GroupState::InGroup(group);
        due
    }
}

/// Lay out one table as rows of text cells, trailing empty cells trimmed.
pub fn to_text(table: &Table) -> Vec<TextRow> {
    let mut rows = Vec::with_capacity(table.rows.len() + 1);
    let mut header = header_row(table);
    header.trim();
    rows.push(header);

    let mut state = GroupState::NoGroupSeen;
    for row in &table.rows {
        if state.enter(&row.group) {
            let mut separator = TextRow::new([row.group.as_str()]);
            separator.trim();
            rows.push(separator);
        }

        let mut text = TextRow::new([row.benchmark.as_str()]);
        for m in &row.metrics {
            let (mean, unit, diff) = format_metrics(m);
            text.push(mean);
            text.push(unit);
            text.push(diff);
        }
        if table.is_old_new() {
            text.push(row.delta.as_str());
            text.push(row.note.as_str());
        }
        text.trim();
        rows.push(text);
    }
    rows
}

#[cfg(test)]
#[path = "grid_test.rs"]
mod grid_test;
