//! Path resolution for a promptplan run.
//!
//! There is no configuration file. The two inputs have fixed names and are
//! looked up in the current working directory, output files land in the
//! current working directory, and the production image tree is rooted at the
//! directory holding the executable.
//!
//! The production base and the output directory are deliberately kept apart:
//! invoking the tool from elsewhere makes them differ.

use crate::error::{PromptPlanError, Result};
use std::env;
use std::path::{Path, PathBuf};

/// File name of the markdown plan table.
pub const PLAN_FILE: &str = "image_generation_plan.md";

/// File name of the prompt template.
pub const TEMPLATE_FILE: &str = "nanobanana_template.md";

/// Resolved paths for one run.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Plan table location.
    pub plan_path: PathBuf,

    /// Template location.
    pub template_path: PathBuf,

    /// Root that relative link paths are resolved against for the production check.
    pub base_dir: PathBuf,

    /// Directory output text files are written to. Empty means the working directory.
    pub output_dir: PathBuf,
}

impl Settings {
    /// Resolve settings for a normal CLI invocation.
    ///
    /// Input and output paths stay relative so that diagnostics print bare
    /// file names, exactly as they are looked up.
    pub fn resolve() -> Result<Self> {
        let exe = env::current_exe().map_err(PromptPlanError::BaseDirUnavailable)?;
        let base_dir = exe
            .parent()
            .map(Path::to_path_buf)
            .ok_or_else(|| {
                PromptPlanError::BaseDirUnavailable(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("'{}' has no parent directory", exe.display()),
                ))
            })?;

        Ok(Self {
            plan_path: PathBuf::from(PLAN_FILE),
            template_path: PathBuf::from(TEMPLATE_FILE),
            base_dir,
            output_dir: PathBuf::new(),
        })
    }

    /// Settings with inputs and outputs under `work_dir` and the production
    /// tree rooted at `base_dir`.
    pub fn with_dirs<P: AsRef<Path>, Q: AsRef<Path>>(work_dir: P, base_dir: Q) -> Self {
        let work_dir = work_dir.as_ref();
        Self {
            plan_path: work_dir.join(PLAN_FILE),
            template_path: work_dir.join(TEMPLATE_FILE),
            base_dir: base_dir.as_ref().to_path_buf(),
            output_dir: work_dir.to_path_buf(),
        }
    }

    /// Location of the output file with the given name.
    pub fn output_path(&self, file_name: &str) -> PathBuf {
        self.output_dir.join(file_name)
    }
}
