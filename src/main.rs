//! refcheck - Validate repo-relative path references in documentation
//!
//! refcheck scans:
//! - The top-level docs (README.md, AGENT-SETUP.md, PROFILES.md)
//! - Every skills/<name>/SKILL.md
//!
//! and reports references that resolve to nothing on disk.

use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;

mod backends;
mod cli;
mod core;
mod refs;

fn main() -> Result<ExitCode> {
    let cli = cli::Cli::parse();
    cli::run(cli)
}
