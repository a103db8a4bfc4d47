//! Lint runner: walks the source tree, checks each file, accumulates the
//! run summary.
//!
//! Files are processed strictly one at a time; the only mutable state is the
//! local summary accumulator. Cross-file ordering carries no meaning, but
//! targets are sorted so output is stable run to run.

use crate::checks::check_source;
use crate::models::{Diagnostic, FileReport, LintResult, Severity, Summary};
use glob::glob;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
/// Fatal configuration failure reported before any file is checked.
pub enum LintError {
    #[error("Root directory not found: {} (pass --root or configure molint.toml)", .0.display())]
    MissingRoot(PathBuf),
    #[error("Invalid file pattern '{pattern}': {source}")]
    BadPattern {
        pattern: String,
        source: glob::PatternError,
    },
}

/// Run the structural checks over every `*.{ext}` file under `root`.
///
/// A missing root or an unusable glob pattern is a fatal configuration
/// error: no files are processed and the caller should exit non-zero. A
/// file that cannot be read yields a single per-file error diagnostic and
/// the run continues.
pub fn run_lint(root: &Path, ext: &str) -> Result<LintResult, LintError> {
    if !root.is_dir() {
        return Err(LintError::MissingRoot(root.to_path_buf()));
    }

    let mut reports: Vec<FileReport> = Vec::new();
    let mut summary = Summary::default();

    for path in collect_targets(root, ext)? {
        let diagnostics = match fs::read_to_string(&path) {
            Ok(content) => check_source(&content),
            Err(e) => vec![Diagnostic::error(format!("Cannot read file: {e}"))],
        };
        summary.files += 1;
        summary.errors += diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Error)
            .count();
        summary.warnings += diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Warning)
            .count();
        reports.push(FileReport {
            file: display_path(&path, root),
            diagnostics,
        });
    }

    Ok(LintResult { reports, summary })
}

/// Process exit status for a completed run: errors block, warnings do not.
pub fn exit_code(summary: &Summary) -> i32 {
    if summary.errors > 0 {
        1
    } else {
        0
    }
}

/// Expand `root/**/*.{ext}` and sort the matches.
fn collect_targets(root: &Path, ext: &str) -> Result<Vec<PathBuf>, LintError> {
    let pattern = format!("{}/**/*.{}", root.display(), ext);
    let paths = glob(&pattern).map_err(|source| LintError::BadPattern {
        pattern: pattern.clone(),
        source,
    })?;
    let mut targets: Vec<PathBuf> = paths.flatten().filter(|p| p.is_file()).collect();
    targets.sort();
    Ok(targets)
}

/// Render a path relative to the root's parent, so reports read as
/// `CryoSystem/Tank.mo` rather than an absolute path.
fn display_path(path: &Path, root: &Path) -> String {
    let base = root.parent().unwrap_or(root);
    pathdiff::diff_paths(path, base)
        .unwrap_or_else(|| path.to_path_buf())
        .to_string_lossy()
        .to_string()
}
