/// Configuration resolution module
///
/// This module handles:
/// - The immutable name registries (delta tests, unit aliases, output formats)
/// - Building a `ReportConfig` from CLI arguments
/// - Validating the delta test before any input is read
use crate::cli::CliArgs;
use crate::engine::{Collection, DeltaTest};
use crate::error::{BenchstatError, Result};
use log::debug;
use std::collections::HashMap;
use std::path::PathBuf;

/// Report output format selected with `-output`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Html,
    Json,
}

/// Name lookup tables, built once at startup and passed down explicitly.
///
/// All lookups are case-insensitive.
#[derive(Debug, Clone)]
pub struct Registry {
    delta_tests: HashMap<&'static str, DeltaTest>,
    units: HashMap<&'static str, &'static str>,
    output_formats: HashMap<&'static str, OutputFormat>,
}

impl Registry {
    pub fn new() -> Self {
        let delta_tests = HashMap::from([
            ("none", DeltaTest::None),
            ("u", DeltaTest::UTest),
            ("u-test", DeltaTest::UTest),
            ("utest", DeltaTest::UTest),
            ("t", DeltaTest::TTest),
            ("t-test", DeltaTest::TTest),
            ("ttest", DeltaTest::TTest),
        ]);
        let units = HashMap::from([("b", "B/op"), ("ns", "ns/op"), ("allocs", "allocs/op")]);
        let output_formats =
            HashMap::from([("text", OutputFormat::Text), ("html", OutputFormat::Html), ("json", OutputFormat::Json)]);
        Registry { delta_tests, units, output_formats }
    }

    pub fn delta_test(&self, name: &str) -> Option<DeltaTest> {
        self.delta_tests.get(name.to_lowercase().as_str()).copied()
    }

    /// Resolve a unit alias such as `ns` to its unit (`ns/op`).
    pub fn unit(&self, alias: &str) -> Option<&'static str> {
        self.units.get(alias.to_lowercase().as_str()).copied()
    }

    pub fn output_format(&self, name: &str) -> Option<OutputFormat> {
        self.output_formats.get(name.to_lowercase().as_str()).copied()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

/// Fully resolved settings for one run
#[derive(Debug, Clone, PartialEq)]
pub struct ReportConfig {
    pub delta_test: DeltaTest,
    pub alpha: f64,
    pub geomean: bool,
    pub split_by: Vec<String>,
    /// Units to display, in order; empty means all units
    pub units: Vec<String>,
    pub diff_only: bool,
    pub raw: bool,
    /// `None` when the requested format is unknown; nothing is rendered then
    pub output: Option<OutputFormat>,
    pub files: Vec<PathBuf>,
}

impl ReportConfig {
    /// Statistics engine configured for this run
    pub fn collection(&self) -> Collection {
        Collection {
            alpha: self.alpha,
            add_geomean: self.geomean,
            delta_test: self.delta_test,
            split_by: self.split_by.clone(),
            units: self.units.clone(),
        }
    }
}

/// Resolve a comma-separated unit list; unknown aliases are dropped.
pub fn parse_units(list: &str, registry: &Registry) -> Vec<String> {
    if list.is_empty() {
        return Vec::new();
    }
    list.split(',')
        .filter_map(|alias| {
            let unit = registry.unit(alias);
            if unit.is_none() {
                debug!("Ignoring unknown unit {:?}", alias);
            }
            unit.map(str::to_string)
        })
        .collect()
}

/// Split the `-split` label list; an empty list disables splitting.
pub fn parse_split(list: &str) -> Vec<String> {
    if list.is_empty() { Vec::new() } else { list.split(',').map(str::to_string).collect() }
}

/// Build a complete ReportConfig from CLI arguments
pub fn build_report_config(args: &CliArgs, registry: &Registry) -> Result<ReportConfig> {
    let delta_test = registry
        .delta_test(&args.delta_test)
        .ok_or_else(|| BenchstatError::Usage(format!("unknown delta test {:?}", args.delta_test)))?;

    if args.files.is_empty() {
        return Err(BenchstatError::Usage("no input files".to_string()));
    }

    let output = registry.output_format(&args.output);
    if output.is_none() {
        debug!("Unknown output format {:?}, nothing will be rendered", args.output);
    }

    let config = ReportConfig {
        delta_test,
        alpha: args.alpha,
        geomean: args.geomean,
        split_by: parse_split(&args.split),
        units: parse_units(&args.units, registry),
        diff_only: args.diff,
        raw: args.raw,
        output,
        files: args.files.clone(),
    };
    debug!("Report config: {:?}", config);
    Ok(config)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
