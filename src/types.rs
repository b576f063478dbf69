//! Core data structures shared by the statistics engine and the renderers.
//!
//! The engine produces `Table`s; everything downstream (diff filtering, grid
//! building, rendering) only reads them, except for the in-place row removal
//! done by the diff filter and the scaler swap done in raw mode.

use crate::engine::Scaler;

/// One rendered comparison table: a single metric across all configurations.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Table {
    /// Display name of the metric ("time/op", "alloc/op", ...)
    pub metric: String,
    /// Configuration names in input order (usually the input file paths)
    pub configs: Vec<String>,
    /// Rows in display order; rows sharing a group are contiguous
    pub rows: Vec<Row>,
}

impl Table {
    /// True when the table compares exactly two configurations.
    pub fn is_old_new(&self) -> bool {
        self.configs.len() == 2
    }
}

/// One benchmark's aggregated metrics across every configuration of a table.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Row {
    pub benchmark: String,
    /// Split-key label ("pkg:foo goos:linux"), empty when nothing was split
    pub group: String,
    /// One entry per configuration, same length as `Table::configs`
    pub metrics: Vec<Metrics>,
    /// Percent change summary; "~" means no significant change
    pub delta: String,
    /// 0 = no significant change, +1 = better, -1 = worse
    pub change: i32,
    /// Significance annotation, e.g. "(p=0.016 n=4+5)"
    pub note: String,
    pub scaler: Scaler,
}

/// Aggregate of one (benchmark, configuration, unit) cell.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Metrics {
    /// Empty when the configuration has no data for this benchmark
    pub unit: String,
    pub values: Vec<f64>,
    /// Values left after outlier rejection
    pub rvalues: Vec<f64>,
    pub min: f64,
    pub mean: f64,
    pub max: f64,
}

impl Metrics {
    /// Create metrics with only a unit and a mean (used for synthesized rows).
    pub fn with_mean(unit: impl Into<String>, mean: f64) -> Self {
        Metrics { unit: unit.into(), mean, ..Default::default() }
    }

    /// True if this configuration carries data.
    pub fn has_data(&self) -> bool {
        !self.unit.is_empty()
    }

    /// Spread of the samples around the mean as a whole percentage ("3%").
    ///
    /// Returns an empty string when the spread is undefined, which happens for
    /// empty metrics and for synthesized rows such as the geometric mean.
    pub fn format_diff(&self) -> String {
        if self.mean == 0.0 || self.max == 0.0 {
            return String::new();
        }
        let mut diff = 1.0 - self.min / self.mean;
        let upper = self.max / self.mean - 1.0;
        if upper > diff {
            diff = upper;
        }
        format!("{:.0}%", diff * 100.0)
    }

    /// Scaled "mean ±diff" text, as shown by the HTML renderer.
    pub fn format(&self, scaler: &Scaler) -> String {
        if !self.has_data() {
            return String::new();
        }
        let mean = scaler.format(self.mean);
        let diff = self.format_diff();
        if diff.is_empty() {
            return mean;
        }
        format!("{} ±{:>3}", mean, diff)
    }
}

/// Raw contents of one input file, named after its configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigInput {
    pub name: String,
    pub data: String,
}

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;
