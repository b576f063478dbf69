//! Parser for `go test -bench` style result files.
//!
//! Two kinds of lines matter:
//! - configuration labels, `key: value`, which stay in effect until the same
//!   key is set again
//! - result lines, `BenchmarkName  iterations  value unit [value unit ...]`
//!
//! Everything else (PASS, ok, build output) is skipped.

use log::debug;

/// One measurement line, with the labels in effect when it was read.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchResult {
    pub name: String,
    pub iterations: u64,
    /// (value, unit) pairs in line order
    pub measurements: Vec<(f64, String)>,
    pub labels: Vec<(String, String)>,
}

impl BenchResult {
    /// Space-joined `key:value` for each split key present in the labels.
    pub fn group(&self, split_by: &[String]) -> String {
        split_by
            .iter()
            .filter_map(|key| self.labels.iter().find(|(k, _)| k == key).map(|(k, v)| format!("{}:{}", k, v)))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Parse a whole file.
pub fn parse_results(data: &str) -> Vec<BenchResult> {
    let mut labels: Vec<(String, String)> = Vec::new();
    let mut results = Vec::new();

    for (lineno, line) in data.lines().enumerate() {
        if let Some((key, value)) = parse_label(line) {
            match labels.iter_mut().find(|(k, _)| *k == key) {
                Some(entry) => entry.1 = value,
                None => labels.push((key, value)),
            }
            continue;
        }

        if !line.starts_with("Benchmark") {
            continue;
        }

        match parse_result_line(line) {
            Some((name, iterations, measurements)) => {
                results.push(BenchResult { name, iterations, measurements, labels: labels.clone() });
            }
            None => debug!("Skipping malformed benchmark line {}: {:?}", lineno + 1, line),
        }
    }

    results
}

/// Recognize `key: value`; keys start with a lowercase letter and contain no
/// whitespace.
fn parse_label(line: &str) -> Option<(String, String)> {
    let (key, rest) = line.split_once(':')?;
    let first = key.chars().next()?;
    if !first.is_ascii_lowercase() || key.chars().any(char::is_whitespace) {
        return None;
    }
    if !rest.is_empty() && !rest.starts_with(char::is_whitespace) {
        return None;
    }
    Some((key.to_string(), rest.trim().to_string()))
}

fn parse_result_line(line: &str) -> Option<(String, u64, Vec<(f64, String)>)> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() < 4 {
        return None;
    }
    let name = fields[0];
    // "Benchmark" followed by a lowercase letter is a plain word, not a result
    if name.chars().nth("Benchmark".len()).is_some_and(|c| c.is_lowercase()) {
        return None;
    }
    let iterations: u64 = fields[1].parse().ok()?;

    let measurements: Vec<(f64, String)> = fields[2..]
        .chunks_exact(2)
        .filter_map(|pair| pair[0].parse::<f64>().ok().map(|value| (value, pair[1].to_string())))
        .collect();
    if measurements.is_empty() {
        return None;
    }

    Some((name.to_string(), iterations, measurements))
}

#[cfg(test)]
#[path = "parse_test.rs"]
mod parse_test;
