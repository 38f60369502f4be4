//! Run reporting.
//!
//! Each examined row yields a [`RowOutcome`]. In the default human mode every
//! outcome is printed as one status line as soon as it is known. In JSON mode
//! nothing is printed per row; a single [`RunSummary`] document is written to
//! stdout when the run ends.
//!
//! # Summary Format
//!
//! ```text
//! {
//!   "started_at": "2026-01-13T10:00:00Z",
//!   "finished_at": "2026-01-13T10:00:01Z",
//!   "created": 1,
//!   "already_in_production": 0,
//!   "output_exists": 1,
//!   "write_failed": 0,
//!   "dropped_rows": 0,
//!   "rows": [
//!     { "outcome": "created", "line": 7, "path": "cnt_a.txt" },
//!     { "outcome": "output_exists", "line": 8, "path": "cnt_b.txt" }
//!   ]
//! }
//! ```

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

/// Result of examining one plan row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum RowOutcome {
    /// The output file was written.
    Created { line: usize, path: PathBuf },
    /// The image is already in the production tree.
    AlreadyInProduction { line: usize, path: PathBuf },
    /// The output file already exists.
    OutputExists { line: usize, path: PathBuf },
    /// Writing the output file failed.
    WriteFailed {
        line: usize,
        path: PathBuf,
        error: String,
    },
}

impl RowOutcome {
    pub fn is_error(&self) -> bool {
        matches!(self, RowOutcome::WriteFailed { .. })
    }
}

impl fmt::Display for RowOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowOutcome::Created { path, .. } => write!(f, "Created: {}", path.display()),
            RowOutcome::AlreadyInProduction { path, .. } => {
                write!(f, "Skipping: Already exists in production: {}", path.display())
            }
            RowOutcome::OutputExists { path, .. } => {
                write!(f, "Skipping existing file: {}", path.display())
            }
            RowOutcome::WriteFailed { path, error, .. } => {
                write!(f, "Error writing {}: {}", path.display(), error)
            }
        }
    }
}

/// Totals and per-row outcomes for one run.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub created: usize,
    pub already_in_production: usize,
    pub output_exists: usize,
    pub write_failed: usize,
    /// Data rows dropped as malformed.
    pub dropped_rows: usize,
    pub rows: Vec<RowOutcome>,
}

impl RunSummary {
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            started_at: now,
            finished_at: now,
            created: 0,
            already_in_production: 0,
            output_exists: 0,
            write_failed: 0,
            dropped_rows: 0,
            rows: Vec::new(),
        }
    }

    pub fn record(&mut self, outcome: RowOutcome) {
        match outcome {
            RowOutcome::Created { .. } => self.created += 1,
            RowOutcome::AlreadyInProduction { .. } => self.already_in_production += 1,
            RowOutcome::OutputExists { .. } => self.output_exists += 1,
            RowOutcome::WriteFailed { .. } => self.write_failed += 1,
        }
        self.rows.push(outcome);
    }

    pub fn record_dropped(&mut self, count: usize) {
        self.dropped_rows += count;
    }

    pub fn finish(&mut self) {
        self.finished_at = Utc::now();
    }
}

impl Default for RunSummary {
    fn default() -> Self {
        Self::new()
    }
}

/// Where run feedback goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Output {
    /// One status line per row: progress on stdout, errors on stderr.
    #[default]
    Human,
    /// A single JSON summary on stdout at the end of the run.
    Json,
}

impl Output {
    pub fn row(&self, outcome: &RowOutcome) {
        if *self != Output::Human {
            return;
        }
        if outcome.is_error() {
            eprintln!("{}", outcome);
        } else {
            println!("{}", outcome);
        }
    }

    pub fn warn(&self, message: &str) {
        eprintln!("Warning: {}", message);
    }

    pub fn finish(&self, summary: &RunSummary) {
        if *self != Output::Json {
            return;
        }
        match serde_json::to_string_pretty(summary) {
            Ok(json) => println!("{}", json),
            Err(e) => eprintln!("Error: failed to serialize run summary: {}", e),
        }
    }
}
