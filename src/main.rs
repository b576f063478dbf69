// Copyright 2015 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

mod cli;
mod config;
mod console_format;
mod engine;
mod error;
mod report;
mod runner;
mod types;
mod ui;

use error::BenchstatError;
use log::debug;
use std::io::{self, Write};

fn main() {
    env_logger::init();

    // Parse CLI arguments (clap exits with status 2 on bad flags)
    let args = cli::CliArgs::parse_args();
    let registry = config::Registry::new();

    if let Err(e) = run(&args, &registry) {
        match e {
            BenchstatError::Usage(ref msg) => ui::print_usage(msg, &cli::CliArgs::help_text()),
            ref other => ui::print_error(&other.to_string()),
        }
        std::process::exit(e.exit_code());
    }
}

fn run(args: &cli::CliArgs, registry: &config::Registry) -> Result<(), BenchstatError> {
    // Usage errors are caught before any file is opened
    let config = config::build_report_config(args, registry)?;

    let inputs = runner::read_inputs(&config.files)?;
    let engine = config.collection();
    let report = runner::build_report(&engine, &config, &inputs)?;
    debug!("Writing {} bytes of report", report.len());

    let mut stdout = io::stdout().lock();
    stdout.write_all(&report)?;
    stdout.flush()?;
    Ok(())
}
