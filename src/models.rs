//! Shared data models for check results and run reporting.

use serde::Serialize;

#[derive(Serialize, Clone, Copy, PartialEq, Eq, Debug)]
#[serde(rename_all = "lowercase")]
/// Diagnostic severity. Errors block downstream loading; warnings are advisory.
pub enum Severity {
    Error,
    Warning,
}

#[derive(Serialize, Clone, Debug)]
/// A single detected issue with severity and message.
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
}

impl Diagnostic {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
        }
    }
}

#[derive(Serialize, Debug)]
/// Diagnostics for one checked file, keyed by its display path.
pub struct FileReport {
    pub file: String,
    pub diagnostics: Vec<Diagnostic>,
}

impl FileReport {
    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Warning)
    }

    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

#[derive(Serialize, Debug, Default)]
/// Aggregated run summary used by printers and exit-code selection.
pub struct Summary {
    pub files: usize,
    pub errors: usize,
    pub warnings: usize,
}

#[derive(Serialize, Debug)]
/// Lint results container: per-file reports plus the run summary.
pub struct LintResult {
    pub reports: Vec<FileReport>,
    pub summary: Summary,
}
