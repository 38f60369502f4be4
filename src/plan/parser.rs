//! Line-level parsing of the plan table.

use super::{Columns, FILENAME_COLUMN, LINE_BREAK_MARKER, PROMPT_COLUMN, PlanRow, PlanTable};
use crate::error::{PromptPlanError, Result};

/// Fewest fields a table line needs to be considered at all.
const MIN_FIELDS: usize = 3;

/// Parse plan markdown into a [`PlanTable`].
///
/// Returns [`PromptPlanError::MissingHeader`] when no table row names both the
/// filename and prompt columns, and [`PromptPlanError::MissingColumns`] when the
/// header row lacks the link path column.
pub fn parse_plan(content: &str) -> Result<PlanTable> {
    let mut header: Option<Columns> = None;
    let mut rows = Vec::new();
    let mut dropped = 0;

    for (index, raw_line) in content.lines().enumerate() {
        let line = raw_line.trim();
        if !line.starts_with('|') {
            continue;
        }

        let Some(columns) = header else {
            if let Some(fields) = split_row(line)
                && is_header(&fields)
            {
                header = Some(Columns::resolve(&fields)?);
            }
            continue;
        };

        if is_separator(line) {
            continue;
        }

        match split_row(line).and_then(|fields| data_row(&fields, &columns, index + 1)) {
            Some(row) => rows.push(row),
            None => dropped += 1,
        }
    }

    let columns = header.ok_or(PromptPlanError::MissingHeader)?;
    Ok(PlanTable {
        columns,
        rows,
        dropped,
    })
}

/// Split a table line into trimmed fields.
///
/// The empty fields produced by leading and trailing pipes are discarded.
/// Returns `None` when fewer than three fields remain.
pub(super) fn split_row(line: &str) -> Option<Vec<&str>> {
    let mut fields: Vec<&str> = line.split('|').map(str::trim).collect();

    if fields.first().is_some_and(|f| f.is_empty()) {
        fields.remove(0);
    }
    if fields.last().is_some_and(|f| f.is_empty()) {
        fields.pop();
    }

    (fields.len() >= MIN_FIELDS).then_some(fields)
}

pub(super) fn is_header(fields: &[&str]) -> bool {
    fields.contains(&FILENAME_COLUMN) && fields.contains(&PROMPT_COLUMN)
}

/// Markdown divider rows (`|---|:---:|`) are matched by substring.
pub(super) fn is_separator(line: &str) -> bool {
    line.contains("---")
}

fn data_row(fields: &[&str], columns: &Columns, line: usize) -> Option<PlanRow> {
    if fields.len() < columns.required_width() {
        return None;
    }

    let filename = fields[columns.filename];
    let prompt = fields[columns.prompt];
    if filename.is_empty() || prompt.is_empty() {
        return None;
    }

    Some(PlanRow {
        line,
        filename: filename.to_string(),
        relative_link_path: fields[columns.link_path].to_string(),
        prompt: prompt.replace(LINE_BREAK_MARKER, "\n"),
    })
}
