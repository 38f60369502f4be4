//! Plan table reading.
//!
//! The plan is a markdown document holding one pipe-delimited table. Prose,
//! headings and blank lines around it are ignored. Columns are located by
//! header name, so the table may carry extra columns in any order:
//!
//! ```text
//! | ID | Group | Proposed Image Filename | Relative Link Path | Prompt |
//! |----|-------|-------------------------|--------------------|--------|
//! | 1  | intro | cnt_intro.png           | ./intro/cnt_intro.png | Draw a map<br>of the system. |
//! ```
//!
//! `<br>` inside a prompt cell stands for a line break.

mod parser;


use crate::error::{PromptPlanError, Result};
use std::fs;
use std::io;
use std::path::Path;

pub use parser::parse_plan;

/// Header of the column holding the target image file name.
pub const FILENAME_COLUMN: &str = "Proposed Image Filename";

/// Header of the column holding the production link path.
pub const LINK_PATH_COLUMN: &str = "Relative Link Path";

/// Header of the column holding the generation prompt.
pub const PROMPT_COLUMN: &str = "Prompt";

/// Marker in prompt cells that is turned into a newline.
pub const LINE_BREAK_MARKER: &str = "<br>";

/// Zero-based positions of the named columns, resolved from the header row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Columns {
    pub filename: usize,
    pub link_path: usize,
    pub prompt: usize,
}

impl Columns {
    /// Resolve the column positions by name. The first matching header wins.
    pub fn resolve(header: &[&str]) -> Result<Self> {
        let position = |name: &str| {
            header
                .iter()
                .position(|field| *field == name)
                .ok_or(PromptPlanError::MissingColumns)
        };

        Ok(Self {
            filename: position(FILENAME_COLUMN)?,
            link_path: position(LINK_PATH_COLUMN)?,
            prompt: position(PROMPT_COLUMN)?,
        })
    }

    /// Minimum number of fields a data row needs to cover every column.
    pub fn required_width(&self) -> usize {
        self.filename.max(self.link_path).max(self.prompt) + 1
    }
}

/// One data row of the plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanRow {
    /// 1-based line number in the plan file.
    pub line: usize,
    pub filename: String,
    pub relative_link_path: String,
    /// Prompt text with line-break markers already converted.
    pub prompt: String,
}

/// A parsed plan table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanTable {
    pub columns: Columns,
    pub rows: Vec<PlanRow>,
    /// Data rows dropped for being too narrow or missing a filename or prompt.
    pub dropped: usize,
}

/// Read and parse the plan file at `path`.
pub fn read_plan(path: &Path) -> Result<PlanTable> {
    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => PromptPlanError::MissingInput(path.to_path_buf()),
        _ => PromptPlanError::Io {
            path: path.to_path_buf(),
            source: e,
        },
    })?;

    parse_plan(&content)
}
