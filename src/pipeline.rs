//! The prompt generation run.
//!
//! Inputs are checked and loaded once, then every plan row goes through the
//! existence checks and, if it survives them, gets its prompt file written.
//! Rows are handled strictly in table order and independently of each other:
//! a failed write is reported and the run moves on to the next row.

use crate::error::{PromptPlanError, Result};
use crate::filter::{self, Decision};
use crate::fs::write_new_file;
use crate::plan::{self, PlanRow};
use crate::probe::FileProbe;
use crate::report::{Output, RowOutcome, RunSummary};
use crate::settings::Settings;
use crate::template::{PLACEHOLDER, Template};
use std::path::PathBuf;

/// Run the pipeline against `settings`.
///
/// Returns an error only for the fatal cases: a missing input file, an
/// unreadable input, or a plan without a usable header. In every fatal case
/// no output file has been written.
pub fn run<P: FileProbe>(settings: &Settings, probe: &P, output: Output) -> Result<RunSummary> {
    for input in [&settings.plan_path, &settings.template_path] {
        if !probe.exists(input) {
            return Err(PromptPlanError::MissingInput(input.clone()));
        }
    }

    let template = Template::load(&settings.template_path)?;
    if template.placeholder_count() == 0 {
        output.warn(&format!(
            "template {} has no {} marker",
            settings.template_path.display(),
            PLACEHOLDER
        ));
    }

    let table = plan::read_plan(&settings.plan_path)?;

    let mut summary = RunSummary::new();
    summary.record_dropped(table.dropped);

    for row in &table.rows {
        let outcome = match filter::evaluate(row, settings, probe) {
            Decision::InProduction(path) => RowOutcome::AlreadyInProduction {
                line: row.line,
                path,
            },
            Decision::NoOutputName => {
                summary.record_dropped(1);
                continue;
            }
            Decision::OutputExists(path) => RowOutcome::OutputExists {
                line: row.line,
                path,
            },
            Decision::Write(path) => write_row(&template, row, path),
        };

        output.row(&outcome);
        summary.record(outcome);
    }

    summary.finish();
    output.finish(&summary);
    Ok(summary)
}

fn write_row(template: &Template, row: &PlanRow, path: PathBuf) -> RowOutcome {
    let content = template.render(&row.prompt);
    match write_new_file(&path, &content) {
        Ok(()) => RowOutcome::Created {
            line: row.line,
            path,
        },
        Err(e) => RowOutcome::WriteFailed {
            line: row.line,
            path,
            error: e.to_string(),
        },
    }
}
