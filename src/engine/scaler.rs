//! Human-friendly value scaling.
//!
//! A `Scaler` is chosen once per row from a representative value and then
//! applied to every value in that row, so all cells of a row share precision
//! and SI prefix.

use serde::{Deserialize, Serialize};

/// Formats values with a fixed precision, divisor and suffix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scaler {
    precision: usize,
    divisor: f64,
    suffix: String,
}

/// (threshold, precision, divisor, prefix), checked top to bottom.
const SI_STEPS: &[(f64, usize, f64, &str)] = &[
    (99.5e12, 0, 1e12, "T"),
    (9.95e12, 1, 1e12, "T"),
    (995e9, 2, 1e12, "T"),
    (99.5e9, 0, 1e9, "G"),
    (9.95e9, 1, 1e9, "G"),
    (995e6, 2, 1e9, "G"),
    (99.5e6, 0, 1e6, "M"),
    (9.95e6, 1, 1e6, "M"),
    (995e3, 2, 1e6, "M"),
    (99.5e3, 0, 1e3, "k"),
    (9.95e3, 1, 1e3, "k"),
    (995.0, 2, 1e3, "k"),
    (99.5, 0, 1.0, ""),
    (9.95, 1, 1.0, ""),
];

/// Same idea for durations, expressed in seconds.
const TIME_STEPS: &[(f64, usize, f64, &str)] = &[
    (99.5, 0, 1e9, "s"),
    (9.95, 1, 1e9, "s"),
    (0.995, 2, 1e9, "s"),
    (0.0995, 0, 1e6, "ms"),
    (0.00995, 1, 1e6, "ms"),
    (0.000995, 2, 1e6, "ms"),
    (0.0000995, 0, 1e3, "µs"),
    (0.00000995, 1, 1e3, "µs"),
    (0.000000995, 2, 1e3, "µs"),
    (0.0000000995, 0, 1.0, "ns"),
    (0.00000000995, 1, 1.0, "ns"),
];

impl Scaler {
    /// Pick a scaler suited to `value` measured in `unit`.
    pub fn new(value: f64, unit: &str) -> Self {
        if unit == "ns/op" {
            return Self::time(value);
        }

        // MB/s is scaled as bytes per second
        let prescale = if unit == "MB/s" { 1e6 } else { 1.0 };
        let x = value * prescale;
        let (precision, divisor, prefix) = SI_STEPS
            .iter()
            .find(|(threshold, ..)| x >= *threshold)
            .map(|&(_, p, d, s)| (p, d, s))
            .unwrap_or((2, 1.0, ""));

        let mut suffix = prefix.to_string();
        match unit {
            "B/op" => suffix.push('B'),
            "MB/s" => suffix.push_str("B/s"),
            _ => {}
        }

        Scaler { precision, divisor: divisor / prescale, suffix }
    }

    fn time(ns: f64) -> Self {
        let seconds = ns / 1e9;
        let (precision, divisor, suffix) = TIME_STEPS
            .iter()
            .find(|(threshold, ..)| seconds >= *threshold)
            .map(|&(_, p, d, s)| (p, d, s))
            .unwrap_or((2, 1.0, "ns"));
        Scaler { precision, divisor, suffix: suffix.to_string() }
    }

    /// Scaler that prints values unscaled, rounded to an integer, followed by
    /// the short form of `unit`.
    pub fn raw(unit: &str) -> Self {
        let suffix = match unit {
            "ns/op" => "ns",
            "B/op" => "B",
            "allocs/op" => "",
            other => other,
        };
        Scaler { precision: 0, divisor: 1.0, suffix: suffix.to_string() }
    }

    pub fn format(&self, value: f64) -> String {
        format!("{:.*}{}", self.precision, value / self.divisor, self.suffix)
    }
}

#[cfg(test)]
#[path = "scaler_test.rs"]
mod scaler_test;
