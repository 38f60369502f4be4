//! CLI argument parsing for promptplan.
//!
//! The tool takes no required arguments: running it in a directory holding
//! `image_generation_plan.md` and `nanobanana_template.md` performs the whole run.

use clap::Parser;

/// Generate image prompt files from a markdown image generation plan.
///
/// Reads `image_generation_plan.md` and `nanobanana_template.md` from the
/// current directory and writes `<image stem>.txt` for every planned image that
/// is neither in the production tree (next to this executable) nor already
/// has a prompt file.
#[derive(Parser, Debug)]
#[command(name = "promptplan")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Print a JSON run summary instead of per-row status lines.
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
