use crate::probe::FileProbe;
use crate::settings::{PLAN_FILE, TEMPLATE_FILE};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{LazyLock, Mutex, MutexGuard};

static CWD_LOCK: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));

pub(crate) struct DirGuard {
    original: PathBuf,
    _lock: MutexGuard<'static, ()>,
}

impl DirGuard {
    pub(crate) fn new(new_dir: &Path) -> Self {
        // Changing the process current working directory is global and not thread-safe.
        // Lock it so tests don't race even if a #[serial] annotation is missed.
        let lock = CWD_LOCK.lock().unwrap_or_else(|poison| poison.into_inner());
        let original = std::env::current_dir().unwrap();
        std::env::set_current_dir(new_dir).unwrap();
        Self {
            original,
            _lock: lock,
        }
    }
}

impl Drop for DirGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original);
    }
}

/// In-memory [`FileProbe`]: only the listed paths exist.
#[derive(Debug, Default)]
pub(crate) struct FakeProbe {
    paths: HashSet<PathBuf>,
}

impl FakeProbe {
    pub(crate) fn with_paths<I: IntoIterator<Item = PathBuf>>(paths: I) -> Self {
        Self {
            paths: paths.into_iter().collect(),
        }
    }
}

impl FileProbe for FakeProbe {
    fn exists(&self, path: &Path) -> bool {
        self.paths.contains(path)
    }
}

/// Build a plan document with the standard column layout.
///
/// Each row is `(filename, relative link path, prompt)`.
pub(crate) fn plan_markdown(rows: &[(&str, &str, &str)]) -> String {
    let mut plan = String::from(
        "# Image Generation Plan\n\n\
         | ID | File Name | Group | Proposed Image Filename | Relative Link Path | Prompt | Insertion Point |\n\
         |----|-----------|-------|-------------------------|--------------------|--------|-----------------|\n",
    );
    for (i, (filename, link, prompt)) in rows.iter().enumerate() {
        plan.push_str(&format!(
            "| {} | page.md | core | {} | {} | {} | end |\n",
            i + 1,
            filename,
            link,
            prompt
        ));
    }
    plan
}

/// Write the plan and template into `dir` under their fixed names.
pub(crate) fn write_inputs(dir: &Path, plan: &str, template: &str) {
    fs::write(dir.join(PLAN_FILE), plan).unwrap();
    fs::write(dir.join(TEMPLATE_FILE), template).unwrap();
}

/// Create a file (and its parent directories) under `root`.
pub(crate) fn touch(root: &Path, relative: &str) -> PathBuf {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, b"existing").unwrap();
    path
}
