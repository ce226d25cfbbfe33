//! CLI module - Command-line interface definitions and handlers

use anyhow::Result;
use clap::Parser;
use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;

use crate::core::paths::{detect_repo_root, RootSource};
use crate::core::render::RenderConfig;

/// refcheck - find broken repo-relative references in documentation.
#[derive(Parser, Debug)]
#[command(name = "refcheck")]
#[command(
    author,
    version,
    about,
    long_about = r#"refcheck scans a fixed set of documents for repo-relative path references
and fails if any of them point at nothing.

Scanned documents:
- README.md, AGENT-SETUP.md, PROFILES.md at the repo root
- skills/<name>/SKILL.md for every entry under skills/

Extracted references:
- markdown links: [label](path)
- inline paths under known top-level dirs: `skills/x/SKILL.md`
- backticked directories: `skills/x/`

Each reference is resolved against the repo root first, then against the
directory of the document that contains it.

Exit codes:
    0  all references resolve
    1  at least one broken reference

Examples:
    refcheck
    refcheck --root path/to/repo
"#
)]
pub struct Cli {
    /// Repo root (default: auto-detect).
    #[arg(
        long,
        value_name = "ROOT",
        long_help = "Repo root to scan.\n\n\
If omitted, refcheck walks up from its own executable looking for README.md\n\
(at most 5 directories) and falls back to the current directory."
    )]
    pub root: Option<PathBuf>,

    /// Disable colored output.
    #[arg(
        long,
        long_help = "Disable colored output. Colors are also disabled automatically when\n\
stdout is not a terminal."
    )]
    pub no_color: bool,

    /// Verbose mode (per-document diagnostics on stderr).
    #[arg(
        short,
        long,
        long_help = "Print per-document diagnostics to stderr: how the root was found,\n\
which documents were checked or skipped and how many broken references each had."
    )]
    pub verbose: bool,
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<ExitCode> {
    let color = !cli.no_color && std::io::stdout().is_terminal();
    colored::control::set_override(color);
    let render_config = RenderConfig::new(color, cli.verbose);

    let (root, source) = match cli.root {
        Some(root) => (root.canonicalize().unwrap_or(root), RootSource::Override),
        None => detect_repo_root(),
    };

    crate::refs::validate::run_validate(&root, source, render_config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_root_is_optional() {
        let cli = Cli::try_parse_from(["refcheck"]).unwrap();
        assert!(cli.root.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn test_root_override() {
        let cli = Cli::try_parse_from(["refcheck", "--root", "/tmp/repo", "-v"]).unwrap();
        assert_eq!(cli.root, Some(PathBuf::from("/tmp/repo")));
        assert!(cli.verbose);
    }

    #[test]
    fn test_unknown_flag_rejected() {
        assert!(Cli::try_parse_from(["refcheck", "--format", "json"]).is_err());
    }
}
