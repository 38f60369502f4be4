//! Whole-file writes for generated prompt files.
//!
//! Writes follow this pattern:
//! 1. Write content to a temporary file (`.{filename}.tmp`) in the same directory
//! 2. Sync the file to disk
//! 3. Rename it onto the target path
//!
//! The caller has already established that the target does not exist, so the
//! rename only ever creates a new directory entry. On failure the temporary
//! file is removed and the target is left untouched.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Write `content` to `path` as a single UTF-8 file.
///
/// Errors carry the underlying I/O cause; the caller reports them per row.
pub fn write_new_file<P: AsRef<Path>>(path: P, content: &str) -> io::Result<()> {
    let path = path.as_ref();
    let temp_path = temp_path_for(path)?;

    if let Err(e) = write_and_sync(&temp_path, content.as_bytes()) {
        let _ = fs::remove_file(&temp_path);
        return Err(e);
    }

    if let Err(e) = fs::rename(&temp_path, path) {
        let _ = fs::remove_file(&temp_path);
        return Err(e);
    }

    sync_parent(path);
    Ok(())
}

/// Temporary sibling path for `target`.
fn temp_path_for(target: &Path) -> io::Result<PathBuf> {
    let filename = target.file_name().and_then(|n| n.to_str()).ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("invalid output file path '{}'", target.display()),
        )
    })?;

    Ok(target.with_file_name(format!(".{}.tmp", filename)))
}

fn write_and_sync(path: &Path, content: &[u8]) -> io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(content)?;
    file.sync_all()
}

/// Persist the new directory entry.
#[cfg(unix)]
fn sync_parent(path: &Path) {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    if let Ok(dir) = File::open(parent) {
        let _ = dir.sync_all();
    }
}

#[cfg(not(unix))]
fn sync_parent(_path: &Path) {}
