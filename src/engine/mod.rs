//! Statistics engine: turns raw benchmark files into comparison `Table`s.
//!
//! The report pipeline only talks to the engine through `StatsEngine`, so the
//! renderers can be exercised with hand-built tables.
//!
//! # Module Organization
//!
//! - `parse` - reading `go test -bench` style result files
//! - `stats` - outlier rejection, means and significance tests
//! - `scaler` - human-friendly value formatting

mod parse;
mod scaler;
pub mod stats;

pub use parse::{BenchResult, parse_results};
pub use scaler::Scaler;
pub use stats::DeltaTest;

use crate::types::{ConfigInput, Metrics, Row, Table};
use log::debug;
use std::collections::HashMap;

/// Label of the synthesized geometric-mean row.
pub const GEOMEAN_ROW: &str = "[Geo mean]";

/// Capability boundary between the report pipeline and statistics.
pub trait StatsEngine {
    /// Aggregate the given configurations into display tables.
    fn compute_tables(&self, configs: &[ConfigInput]) -> Vec<Table>;
}

/// Default engine, configured from the command line.
#[derive(Debug, Clone, PartialEq)]
pub struct Collection {
    /// Changes with p below this are significant
    pub alpha: f64,
    pub add_geomean: bool,
    pub delta_test: DeltaTest,
    /// Label keys whose values split benchmarks into groups
    pub split_by: Vec<String>,
    /// When non-empty, only these units are tabulated, in this order
    pub units: Vec<String>,
}

impl Default for Collection {
    fn default() -> Self {
        Collection { alpha: 0.05, add_geomean: false, delta_test: DeltaTest::UTest, split_by: Vec::new(), units: Vec::new() }
    }
}

/// Map a unit to the metric name shown in table headers.
pub fn metric_name(unit: &str) -> String {
    match unit {
        "ns/op" => "time/op".to_string(),
        "MB/s" => "speed".to_string(),
        "B/op" => "alloc/op".to_string(),
        other => other.to_string(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct Key {
    config: usize,
    group: String,
    benchmark: String,
    unit: String,
}

/// Everything read from the inputs, in order of first appearance.
#[derive(Debug, Default)]
struct Aggregate {
    configs: Vec<String>,
    groups: Vec<String>,
    benchmarks: HashMap<String, Vec<String>>,
    units: Vec<String>,
    metrics: HashMap<Key, Metrics>,
}

impl Aggregate {
    fn add_config(&mut self, input: &ConfigInput, split_by: &[String]) {
        let config = self.configs.len();
        self.configs.push(input.name.clone());

        let results = parse_results(&input.data);
        debug!("Config {}: {} benchmark results", input.name, results.len());

        for result in results {
            let group = result.group(split_by);
            if !self.groups.contains(&group) {
                self.groups.push(group.clone());
            }
            let names = self.benchmarks.entry(group.clone()).or_default();
            if !names.contains(&result.name) {
                names.push(result.name.clone());
            }

            for (value, unit) in result.measurements {
                if !self.units.contains(&unit) {
                    self.units.push(unit.clone());
                }
                let key = Key { config, group: group.clone(), benchmark: result.name.clone(), unit: unit.clone() };
                let metrics = self.metrics.entry(key).or_insert_with(|| Metrics { unit, ..Default::default() });
                metrics.values.push(value);
            }
        }
    }

    fn compute_stats(&mut self) {
        for metrics in self.metrics.values_mut() {
            metrics.rvalues = stats::reject_outliers(&metrics.values);
            let (min, max) = stats::bounds(&metrics.rvalues);
            metrics.min = min;
            metrics.max = max;
            metrics.mean = stats::mean(&metrics.rvalues);
        }
    }

    fn lookup(&self, config: usize, group: &str, benchmark: &str, unit: &str) -> Option<&Metrics> {
        let key = Key { config, group: group.to_string(), benchmark: benchmark.to_string(), unit: unit.to_string() };
        self.metrics.get(&key)
    }
}

impl StatsEngine for Collection {
    fn compute_tables(&self, configs: &[ConfigInput]) -> Vec<Table> {
        let mut agg = Aggregate::default();
        for input in configs {
            agg.add_config(input, &self.split_by);
        }
        agg.compute_stats();

        let units: Vec<String> = if self.units.is_empty() { agg.units.clone() } else { self.units.clone() };

        let mut tables = Vec::new();
        for unit in &units {
            let table = self.build_table(&agg, unit);
            if table.rows.is_empty() {
                debug!("No rows for unit {}, dropping table", unit);
                continue;
            }
            tables.push(table);
        }
        tables
    }
}

impl Collection {
    fn build_table(&self, agg: &Aggregate, unit: &str) -> Table {
        let mut table = Table { metric: metric_name(unit), configs: agg.configs.clone(), rows: Vec::new() };
        let old_new = table.is_old_new();

        for group in &agg.groups {
            let Some(names) = agg.benchmarks.get(group) else { continue };
            for benchmark in names {
                let metrics: Vec<Metrics> = (0..agg.configs.len())
                    .map(|config| agg.lookup(config, group, benchmark, unit).cloned().unwrap_or_default())
                    .collect();
                let Some(first) = metrics.iter().find(|m| m.has_data()) else { continue };
                let scaler = Scaler::new(first.mean, &first.unit);

                let mut row = Row {
                    benchmark: benchmark.clone(),
                    group: if agg.groups.len() > 1 { group.clone() } else { String::new() },
                    metrics,
                    delta: String::new(),
                    change: 0,
                    note: String::new(),
                    scaler,
                };

                if old_new {
                    // Comparisons need both sides
                    if !row.metrics[0].has_data() || !row.metrics[1].has_data() {
                        continue;
                    }
                    self.compare(&mut row, &table.metric);
                }
                table.rows.push(row);
            }
        }

        if self.add_geomean {
            add_geomean(agg, &mut table, unit);
        }
        table
    }

    /// Fill in delta, change and note for a two-config row.
    fn compare(&self, row: &mut Row, metric: &str) {
        let (old, new) = (&row.metrics[0], &row.metrics[1]);
        row.delta = "~".to_string();

        match self.delta_test.p_value(&old.rvalues, &new.rvalues) {
            Err(e) => {
                debug!("{}: no significance ({})", row.benchmark, e);
                row.note = e.note().to_string();
            }
            Ok(p) => {
                if p.is_none_or(|p| p < self.alpha) {
                    let pct = (new.mean / old.mean - 1.0) * 100.0;
                    row.delta = format!("{:+.2}%", pct);
                    // Lower is better, except for throughput
                    row.change = if (pct < 0.0) == (metric != "speed") { 1 } else { -1 };
                }
                if let Some(p) = p {
                    row.note = format!("(p={:.3} n={}+{})", p, old.rvalues.len(), new.rvalues.len());
                }
            }
        }
    }
}

/// Append a geometric-mean row summarizing every benchmark of `unit`.
fn add_geomean(agg: &Aggregate, table: &mut Table, unit: &str) {
    let mut metrics = Vec::new();
    let mut geomeans = Vec::new();
    let mut max_count = 0;
    let mut complete = true;

    for config in 0..agg.configs.len() {
        let means: Vec<f64> = agg
            .groups
            .iter()
            .flat_map(|group| {
                agg.benchmarks.get(group).into_iter().flatten().filter_map(move |b| agg.lookup(config, group, b, unit))
            })
            .map(|m| m.mean)
            // Zero means (e.g. allocs/op) would make the geomean degenerate
            .filter(|mean| *mean != 0.0)
            .collect();

        max_count = max_count.max(means.len());
        if means.is_empty() {
            metrics.push(Metrics::default());
            complete = false;
        } else {
            let g = stats::geomean(&means);
            geomeans.push(g);
            metrics.push(Metrics::with_mean(unit, g));
        }
    }

    // A single contributing benchmark would just repeat its own row
    if max_count <= 1 {
        return;
    }

    let mut delta = String::new();
    if table.is_old_new() && complete {
        let pct = (geomeans[1] / geomeans[0] - 1.0) * 100.0;
        delta = format!("{:+.2}%", pct);
    }

    table.rows.push(Row {
        benchmark: GEOMEAN_ROW.to_string(),
        group: String::new(),
        metrics,
        delta,
        change: 0,
        note: String::new(),
        scaler: Scaler::new(geomeans[0], unit),
    });
}
