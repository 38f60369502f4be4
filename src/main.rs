//! promptplan: generate image prompt files from a markdown image generation plan.
//!
//! This is the entry point for the `promptplan` CLI. It parses arguments,
//! resolves the run settings, runs the pipeline and maps fatal errors to exit
//! codes.

mod cli;
pub mod error;
pub mod exit_codes;
pub mod filter;
pub mod fs;
pub mod pipeline;
pub mod plan;
pub mod probe;
pub mod report;
pub mod settings;
pub mod template;

#[cfg(test)]
mod test_support;

use cli::Cli;
use probe::RealFs;
use report::Output;
use settings::Settings;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    let output = if cli.json { Output::Json } else { Output::Human };

    match Settings::resolve().and_then(|settings| pipeline::run(&settings, &RealFs, output)) {
        Ok(_) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::from(err.exit_code() as u8)
        }
    }
}
