//! Command-line interface layer.
//!
//! - `args`: clap argument definitions and merging with the config file
//! - `run`: executes the enabled checks
//! - `report`: prints issues and the summary line
//! - `exit_status`: maps the outcome to a process exit code

use std::env;

use anyhow::{Context, Result};
use colored::Colorize;

use crate::config::load_config;

pub mod args;
mod exit_status;
pub mod report;
pub mod run;

pub use args::Arguments;
pub use exit_status::ExitStatus;
pub use run::{CheckResult, run};

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let cwd = env::current_dir().context("Failed to get current directory")?;
    let loaded = load_config(&cwd)?;

    if args.verbose {
        match &loaded.path {
            Some(path) => eprintln!(
                "{} Using config {}",
                "note:".bold().cyan(),
                path.display()
            ),
            None => eprintln!(
                "{} No {} found, using defaults",
                "note:".bold().cyan(),
                crate::config::CONFIG_FILE_NAME
            ),
        }
    }

    let options = args.resolve(loaded.config);
    let result = run(options)?;
    report::print(&result);

    Ok(result.exit_status())
}
