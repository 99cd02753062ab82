//! Handles splicing of a single target file.
//!
//! A file is read, checked for the marker, spliced in memory and then
//! replaced on disk. Nothing is written unless every marker resolved.

use std::path::Path;

use super::error::AppError;
use super::file_handler;
use super::verbose_println;
use crate::splice;

/// What happened to a target file that was processed without error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
    /// No marker was present; the file was not written.
    Unchanged,
    /// Every marker was replaced and the file rewritten.
    Spliced { occurrences: usize },
}

/// Splices every marker in `path` with companions found under `base_dir`.
///
/// # Errors
/// - `AppError::ReadTarget` / `AppError::TargetNotUtf8` when the target cannot be read.
/// - `AppError::Splice` when a companion cannot be read; the target is left untouched.
/// - `AppError::WriteTarget` when the rewritten file cannot be put in place.
pub fn process_single_file(
    path: &Path,
    base_dir: &Path,
    quiet_mode: bool,
) -> Result<FileOutcome, AppError> {
    let content = file_handler::read_target(path)?;

    if !splice::contains_marker(&content) {
        verbose_println!(quiet_mode, "   => No marker in {}, skipped.", path.display());
        return Ok(FileOutcome::Unchanged);
    }

    let spliced =
        splice::splice_content(&content, base_dir).map_err(|source| AppError::Splice {
            path: path.to_path_buf(),
            source,
        })?;

    file_handler::replace_file_atomically(path, &spliced.content, quiet_mode).map_err(
        |source| AppError::WriteTarget {
            path: path.to_path_buf(),
            source,
        },
    )?;

    verbose_println!(
        quiet_mode,
        "   => Spliced {} occurrence(s) into {}.",
        spliced.occurrences,
        path.display()
    );
    Ok(FileOutcome::Spliced {
        occurrences: spliced.occurrences,
    })
}
