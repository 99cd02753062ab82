//! Main application orchestrator.
//!
//! Coordinates a splice run:
//! 1. Prints usage and returns when no files were given.
//! 2. Initializes the verbose log file, if one was requested.
//! 3. Processes each file in argument order, delegating to
//!    `processing::process_single_file`. A failure is printed to stdout and
//!    the run moves on to the next file.
//! 4. Logs a summary of spliced, unchanged and failed files.

use clap::CommandFactory;

use super::cli::Cli;
use super::logger;
use super::processing::{self, FileOutcome};
use super::{verbose_eprintln, verbose_println};

/// Per-run counts, one entry per file argument.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub spliced: usize,
    pub unchanged: usize,
    pub failed: usize,
}

/// Runs the splice over every file named in `cli`.
///
/// Never fails: each per-file error is printed as one line on stdout and
/// counted in the returned summary.
pub fn run_app(cli: Cli) -> RunSummary {
    let mut summary = RunSummary::default();

    if cli.files.is_empty() {
        println!("{}", Cli::command().render_usage());
        return summary;
    }

    let quiet_mode = cli.quiet;
    if let Some(log_file) = cli.log_file.as_deref() {
        if !quiet_mode {
            if let Err(e) = logger::init_global_logger(log_file) {
                eprintln!(
                    "Warning: Failed to initialize verbose logger ({}): {}. Verbose file logging will be unavailable.",
                    log_file.display(),
                    e
                );
            }
        }
    }

    verbose_println!(
        quiet_mode,
        "Splicing {} file(s) with companions from {}",
        cli.files.len(),
        cli.base_dir.display()
    );

    for file in &cli.files {
        verbose_println!(quiet_mode, "Processing File: {}", file.display());
        match processing::process_single_file(file, &cli.base_dir, quiet_mode) {
            Ok(FileOutcome::Spliced { .. }) => summary.spliced += 1,
            Ok(FileOutcome::Unchanged) => summary.unchanged += 1,
            Err(e) => {
                summary.failed += 1;
                println!("{}", e);
                verbose_eprintln!(quiet_mode, "{}", e);
            }
        }
    }

    verbose_println!(
        quiet_mode,
        "Done. {} spliced, {} unchanged, {} failed.",
        summary.spliced,
        summary.unchanged,
        summary.failed
    );
    if let Err(e) = logger::flush_global_logger() {
        eprintln!("[WARNING] Failed to perform final flush of the log file: {}", e);
    }

    summary
}
