use crate::config::{OutputFormat, ReportConfig};
use crate::engine::{Scaler, StatsEngine};
use crate::error::{BenchstatError, Result};
use crate::report;
use crate::types::{ConfigInput, Table};
use log::{debug, info};
use std::fs;
use std::path::PathBuf;

/// Read every input file up front, one configuration per file.
///
/// The first unreadable file aborts the run before anything is rendered.
pub fn read_inputs(files: &[PathBuf]) -> Result<Vec<ConfigInput>> {
    files
        .iter()
        .map(|path| {
            let data = fs::read(path).map_err(|source| BenchstatError::ReadInput { path: path.clone(), source })?;
            debug!("Read {} bytes from {}", data.len(), path.display());
            Ok(ConfigInput {
                name: path.display().to_string(),
                data: String::from_utf8_lossy(&data).into_owned(),
            })
        })
        .collect()
}

/// Swap every row's scaler for one that prints unscaled values.
pub fn use_raw_scalers(tables: &mut [Table]) {
    for row in tables.iter_mut().flat_map(|t| t.rows.iter_mut()) {
        let unit = row.metrics.first().map(|m| m.unit.as_str()).unwrap_or("");
        row.scaler = Scaler::raw(unit);
    }
}

/// Compute, post-process and render the report into memory.
///
/// Nothing is written anywhere until the whole report has been produced.
pub fn build_report<E: StatsEngine>(engine: &E, config: &ReportConfig, inputs: &[ConfigInput]) -> Result<Vec<u8>> {
    let mut tables = engine.compute_tables(inputs);
    info!("Computed {} tables from {} configurations", tables.len(), inputs.len());

    if config.raw {
        use_raw_scalers(&mut tables);
    }

    if config.diff_only {
        report::filter_diff(&mut tables);
        if tables.is_empty() && config.output == Some(OutputFormat::Text) {
            return Ok(report::NO_DIFFERENCES.as_bytes().to_vec());
        }
    }

    let mut buf = Vec::new();
    report::render(&mut buf, config.output, &tables)?;
    Ok(buf)
}

#[cfg(test)]
#[path = "runner_test.rs"]
mod runner_test;
