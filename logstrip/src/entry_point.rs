//! Shared entry point for every binary.

use crate::cli::Cli;
use crate::commands::{run_strip, StripOptions};
use crate::config::Config;
use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use tracing::debug;
use tracing::level_filters::LevelFilter;

/// Runs the tool with the given arguments, writing notices to stdout.
///
/// # Errors
///
/// Returns an error if configuration loading, the walk, or any file rewrite fails.
pub fn run_with_args(args: Vec<String>) -> Result<i32> {
    run_with_args_to(args, &mut std::io::stdout())
}

/// Runs the tool with the given arguments, writing notices to `writer`.
///
/// This is the testable version of `run_with_args`.
///
/// # Errors
///
/// Returns an error if configuration loading, the walk, or any file rewrite fails.
pub fn run_with_args_to<W: std::io::Write>(args: Vec<String>, writer: &mut W) -> Result<i32> {
    let mut program_args = vec!["logstrip".to_owned()];
    program_args.extend(args);
    let cli = match Cli::try_parse_from(program_args) {
        Ok(c) => c,
        Err(e) => match e.kind() {
            clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => {
                write!(writer, "{e}")?;
                writer.flush()?;
                return Ok(0);
            }
            _ => {
                eprint!("{e}");
                return Ok(1);
            }
        },
    };

    init_logging(cli.verbose);

    let config = match &cli.config {
        Some(file) => Config::load_file(file)?,
        None => Config::load()?,
    };
    if let Some(file) = &config.config_file_path {
        debug!(config = %file.display(), "loaded configuration");
    }

    let options = StripOptions {
        root: cli
            .root
            .clone()
            .unwrap_or_else(|| config.resolved_root()),
        walk: config.logstrip.walk_options(),
        atomic_write: config.logstrip.atomic_write.unwrap_or(false),
    };
    debug!(?options, "resolved options");

    let summary = run_strip(&options, &mut *writer)?;
    writer.flush()?;

    if cli.verbose {
        eprintln!(
            "{} {} statement(s) removed across {} file(s)",
            "Done:".green(),
            summary.total_removed,
            summary.files.len()
        );
    }
    Ok(0)
}

/// Installs the stderr `tracing` subscriber. A second call keeps the first one.
fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };
    if let Err(e) = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
    {
        debug!(error = %e, "subscriber already installed");
    }
}
