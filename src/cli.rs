use clap::builder::BoolishValueParser;
use clap::{ArgAction, CommandFactory, Parser};
use std::ffi::OsString;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "benchstat")]
#[command(about = "Compute and compare statistics about benchmarks")]
#[command(override_usage = "benchstat [options] old.txt [new.txt] [more.txt ...]")]
#[command(version)]
pub struct CliArgs {
    /// Significance test to apply to delta: utest, ttest, or none
    #[arg(long, default_value = "utest", value_name = "TEST")]
    pub delta_test: String,

    /// Consider change significant if p < α
    #[arg(long, default_value_t = 0.05, value_name = "α")]
    pub alpha: f64,

    /// Print the geometric mean of each file
    #[arg(long, require_equals = true, num_args = 0..=1, default_value = "false", default_missing_value = "true",
          value_parser = BoolishValueParser::new(), action = ArgAction::Set)]
    pub geomean: bool,

    /// Split benchmarks by labels (comma-separated)
    #[arg(long, default_value = "pkg,goos,goarch", value_name = "LABELS")]
    pub split: String,

    /// Print only the given units (comma-separated: b, allocs, ns)
    #[arg(long, default_value = "b,allocs,ns", value_name = "UNITS")]
    pub units: String,

    /// Print only benchmarks whose difference is significant
    #[arg(long, require_equals = true, num_args = 0..=1, default_value = "false", default_missing_value = "true",
          value_parser = BoolishValueParser::new(), action = ArgAction::Set)]
    pub diff: bool,

    /// Print raw unscaled values
    #[arg(long, require_equals = true, num_args = 0..=1, default_value = "false", default_missing_value = "true",
          value_parser = BoolishValueParser::new(), action = ArgAction::Set)]
    pub raw: bool,

    /// Output format: text (default), html, or json
    #[arg(long, default_value = "text", value_name = "FORMAT")]
    pub output: String,

    /// Benchmark result files; one configuration per file
    #[arg(required = true, value_name = "FILE")]
    pub files: Vec<PathBuf>,
}

/// Rewrite Go-style `-flag` arguments to `--flag`.
///
/// Single-letter flags such as `-h` are left alone, as is everything after `--`.
pub fn normalize_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let mut out = Vec::new();
    let mut passthrough = false;
    for (i, arg) in args.into_iter().enumerate() {
        if i == 0 || passthrough {
            out.push(arg);
            continue;
        }
        let Some(s) = arg.to_str() else {
            out.push(arg);
            continue;
        };
        if s == "--" {
            passthrough = true;
            out.push(arg);
            continue;
        }
        let name = s.strip_prefix('-').filter(|rest| !rest.starts_with('-'));
        let long = name.is_some_and(|rest| {
            let flag = rest.split('=').next().unwrap_or(rest);
            flag.chars().next().is_some_and(|c| c.is_ascii_alphabetic()) && flag.chars().count() > 1
        });
        if long {
            out.push(OsString::from(format!("-{}", s)));
        } else {
            out.push(arg);
        }
    }
    out
}

impl CliArgs {
    /// Parse command-line arguments, exiting with status 2 on bad flags
    pub fn parse_args() -> Self {
        CliArgs::parse_from(normalize_args(std::env::args_os()))
    }

    /// Rendered help text, printed alongside usage errors
    pub fn help_text() -> String {
        CliArgs::command().render_help().to_string()
    }
}
