//! Error types for promptplan.
//!
//! Only run-level failures live here. A row that cannot be written is reported
//! as a [`RowOutcome`](crate::report::RowOutcome) and never aborts the run.

use crate::exit_codes;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Fatal errors that stop a run before any row is processed.
#[derive(Error, Debug)]
pub enum PromptPlanError {
    /// The plan or template file does not exist.
    #[error("{} not found.", .0.display())]
    MissingInput(PathBuf),

    /// No table row carried both "Proposed Image Filename" and "Prompt".
    #[error("No plan table header with 'Proposed Image Filename' and 'Prompt' columns found.")]
    MissingHeader,

    /// A header was found but one of the named columns could not be resolved.
    #[error("Could not find required columns in header.")]
    MissingColumns,

    /// An input file exists but could not be read.
    #[error("failed to read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The directory holding the executable could not be determined.
    #[error("failed to locate the executable directory: {0}")]
    BaseDirUnavailable(#[source] io::Error),
}

impl PromptPlanError {
    /// Returns the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            PromptPlanError::MissingInput(_)
            | PromptPlanError::MissingHeader
            | PromptPlanError::MissingColumns => exit_codes::USER_ERROR,
            PromptPlanError::Io { .. } | PromptPlanError::BaseDirUnavailable(_) => {
                exit_codes::IO_FAILURE
            }
        }
    }
}

/// Result type alias for promptplan operations.
pub type Result<T> = std::result::Result<T, PromptPlanError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_input_is_user_error() {
        let err = PromptPlanError::MissingInput(PathBuf::from("image_generation_plan.md"));
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
        assert_eq!(err.to_string(), "image_generation_plan.md not found.");
    }

    #[test]
    fn header_errors_are_user_errors() {
        assert_eq!(
            PromptPlanError::MissingHeader.exit_code(),
            exit_codes::USER_ERROR
        );
        assert_eq!(
            PromptPlanError::MissingColumns.exit_code(),
            exit_codes::USER_ERROR
        );
        assert_eq!(
            PromptPlanError::MissingColumns.to_string(),
            "Could not find required columns in header."
        );
    }

    #[test]
    fn io_error_names_path_and_cause() {
        let err = PromptPlanError::Io {
            path: PathBuf::from("plan.md"),
            source: io::Error::new(io::ErrorKind::InvalidData, "stream did not contain valid UTF-8"),
        };
        assert_eq!(err.exit_code(), exit_codes::IO_FAILURE);
        let message = err.to_string();
        assert!(message.contains("plan.md"));
        assert!(message.contains("valid UTF-8"));
    }
}
