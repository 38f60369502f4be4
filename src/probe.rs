//! Filesystem existence checks.
//!
//! Whether a row produces output depends only on which files exist. The check
//! sits behind [`FileProbe`] so the filter can be driven by an in-memory set
//! in tests.

use std::path::Path;

/// Answers "does something exist at this path".
pub trait FileProbe {
    fn exists(&self, path: &Path) -> bool;
}

/// [`FileProbe`] backed by the real filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct RealFs;

impl FileProbe for RealFs {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}
