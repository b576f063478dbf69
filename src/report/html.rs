//! HTML rendering: a fixed stylesheet followed by one `<table>`.

use crate::types::{Row, Table};
use std::io::{self, Write};

/// Stylesheet emitted before the table markup.
pub const HTML_STYLE: &str = "<style>
.benchstat { border-collapse: collapse; }
.benchstat th:nth-child(1) { text-align: left; }
.benchstat tbody td:nth-child(1n+2):not(.note) { text-align: right; padding: 0em 1em; }
.benchstat tr:not(.configs) th { border-top: 1px solid #666; border-bottom: 1px solid #ccc; }
.benchstat .nodelta { text-align: center !important; }
.benchstat .better td.delta { font-weight: bold; }
.benchstat .worse td.delta { font-weight: bold; color: #c00; }
</style>
";

/// Escape text for use in element content and single-quoted attributes.
pub fn escape_html(s: &str) -> String {
    s.chars()
        .flat_map(|c| match c {
            '<' => "&lt;".chars().collect(),
            '>' => "&gt;".chars().collect(),
            '&' => "&amp;".chars().collect(),
            '"' => "&#34;".chars().collect(),
            '\'' => "&#39;".chars().collect(),
            _ => vec![c],
        })
        .collect()
}

fn row_class(table: &Table, row: &Row) -> Option<&'static str> {
    match table.configs.len() {
        1 => Some("single"),
        2 => Some(match row.change {
            1 => "better",
            -1 => "worse",
            _ => "unchanged",
        }),
        _ => None,
    }
}

fn write_tbody<W: Write>(w: &mut W, table: &Table) -> io::Result<()> {
    let old_new = table.is_old_new();
    let colspan = 1 + table.configs.len() + if old_new { 2 } else { 0 };

    writeln!(w, "<tbody>")?;
    if table.configs.len() == 1 {
        writeln!(w, "<tr><th><th>{}", escape_html(&table.metric))?;
    } else {
        write!(w, "<tr><th><th colspan='{}' class='metric'>{}", table.configs.len(), escape_html(&table.metric))?;
        if old_new {
            write!(w, "<th>delta")?;
        }
        writeln!(w)?;
    }

    let mut current: Option<&str> = None;
    for row in &table.rows {
        if current != Some(row.group.as_str()) {
            if !row.group.is_empty() {
                writeln!(w, "<tr class='group'><th colspan='{}'>{}", colspan, escape_html(&row.group))?;
            }
            current = Some(row.group.as_str());
        }

        match row_class(table, row) {
            Some(class) => write!(w, "<tr class='{}'>", class)?,
            None => write!(w, "<tr>")?,
        }
        write!(w, "<td>{}", escape_html(&row.benchmark))?;
        for m in &row.metrics {
            write!(w, "<td>{}", escape_html(&m.format(&row.scaler)))?;
        }
        if old_new {
            let class = if row.delta == "~" { "nodelta" } else { "delta" };
            write!(w, "<td class='{}'>{}", class, escape_html(&row.delta))?;
            write!(w, "<td class='note'>{}", escape_html(&row.note))?;
        }
        writeln!(w)?;
    }

    writeln!(w, "<tr><td>&nbsp;")?;
    writeln!(w, "</tbody>")
}

/// Render the stylesheet and, when there is anything to show, the table.
pub fn format_html<W: Write>(mut w: W, tables: &[Table]) -> io::Result<()> {
    w.write_all(HTML_STYLE.as_bytes())?;
    let Some(first) = tables.first() else {
        return Ok(());
    };

    if tables.iter().any(Table::is_old_new) {
        writeln!(w, "<table class='benchstat oldnew'>")?;
    } else {
        writeln!(w, "<table class='benchstat'>")?;
    }
    if first.configs.len() != 1 {
        write!(w, "<tr class='configs'><th>")?;
        for config in &first.configs {
            write!(w, "<th>{}", escape_html(config))?;
        }
        writeln!(w)?;
    }
    for table in tables {
        write_tbody(&mut w, table)?;
    }
    writeln!(w, "</table>")
}

#[cfg(test)]
#[path = "html_test.rs"]
mod html_test;
