//! Per-row decision on whether an output file should be written.
//!
//! A row is skipped when its image is already in the production tree, or when
//! its output text file already exists. The two checks use different roots:
//! the production image is looked up under [`Settings::base_dir`], the output
//! file under [`Settings::output_dir`].

use crate::plan::PlanRow;
use crate::probe::FileProbe;
use crate::settings::Settings;
use std::path::{MAIN_SEPARATOR_STR, Path, PathBuf};

/// Extension of generated prompt files.
pub const OUTPUT_EXTENSION: &str = "txt";

/// What to do with a plan row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// The image already exists at this production path.
    InProduction(PathBuf),
    /// The filename has no stem to build an output name from.
    NoOutputName,
    /// The output file already exists at this path.
    OutputExists(PathBuf),
    /// Write the rendered template to this path.
    Write(PathBuf),
}

/// Decide what to do with `row`. The production check runs first.
pub fn evaluate<P: FileProbe>(row: &PlanRow, settings: &Settings, probe: &P) -> Decision {
    let prod_path = production_path(&settings.base_dir, &row.relative_link_path);
    if probe.exists(&prod_path) {
        return Decision::InProduction(prod_path);
    }

    let Some(name) = output_file_name(&row.filename) else {
        return Decision::NoOutputName;
    };

    let output_path = settings.output_path(&name);
    if probe.exists(&output_path) {
        return Decision::OutputExists(output_path);
    }

    Decision::Write(output_path)
}

/// Strip one leading `./` and convert `/` to the host separator.
pub fn normalize_link_path(raw: &str) -> PathBuf {
    let relative = raw.strip_prefix("./").unwrap_or(raw);
    PathBuf::from(relative.replace('/', MAIN_SEPARATOR_STR))
}

/// Location where a row's image lives once it is in production.
pub fn production_path(base_dir: &Path, raw_link_path: &str) -> PathBuf {
    base_dir.join(normalize_link_path(raw_link_path))
}

/// Output file name for an image filename: `cnt_a.png` becomes `cnt_a.txt`.
///
/// Only the final path component is used. Leading dots do not start an
/// extension, so `.hidden` becomes `.hidden.txt`. Returns `None` when no stem
/// is left.
pub fn output_file_name(filename: &str) -> Option<String> {
    let name = filename.rsplit(['/', '\\']).next().unwrap_or(filename);

    let dots = name.len() - name.trim_start_matches('.').len();
    let stem = match name[dots..].rfind('.') {
        Some(idx) => &name[..dots + idx],
        None => name,
    };

    (!stem.is_empty()).then(|| format!("{stem}.{OUTPUT_EXTENSION}"))
}
