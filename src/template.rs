//! Prompt template rendering.
//!
//! A template is plain text holding the literal marker `{{INSERT}}`. Rendering
//! replaces every occurrence of the marker with the prompt in a single pass;
//! text coming from the prompt is never scanned for further markers.

use crate::error::{PromptPlanError, Result};
use std::fs;
use std::io;
use std::path::Path;

/// Marker replaced by the row prompt.
pub const PLACEHOLDER: &str = "{{INSERT}}";

/// A loaded prompt template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    source: String,
}

impl Template {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }

    /// Load a template from a UTF-8 file.
    pub fn load(path: &Path) -> Result<Self> {
        let source = fs::read_to_string(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => PromptPlanError::MissingInput(path.to_path_buf()),
            _ => PromptPlanError::Io {
                path: path.to_path_buf(),
                source: e,
            },
        })?;
        Ok(Self::new(source))
    }

    /// Number of markers in the template. Expected to be exactly one.
    pub fn placeholder_count(&self) -> usize {
        self.source.matches(PLACEHOLDER).count()
    }

    /// Render the template with `prompt` substituted for every marker.
    pub fn render(&self, prompt: &str) -> String {
        self.source.replace(PLACEHOLDER, prompt)
    }
}
