//! Scan-list backend
//!
//! Uses walkdir to list the skills directory

use anyhow::Result;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::core::error::ScanError;

/// Documents at the repo root that are always part of the scan list
pub const ROOT_DOCUMENTS: &[&str] = &["README.md", "AGENT-SETUP.md", "PROFILES.md"];

/// Directory holding one subdirectory per skill
pub const SKILLS_DIR: &str = "skills";

/// Description file inside each skill directory
pub const SKILL_FILE: &str = "SKILL.md";

/// Documents to check in one run, in check order
#[derive(Debug, Clone, Default)]
pub struct ScanList {
    pub documents: Vec<PathBuf>,
}

/// Build the scan list: the root documents (present or not), then every
/// `skills/<entry>/SKILL.md` that exists, sorted by entry name.
pub fn build_scan_list(root: &Path) -> Result<ScanList> {
    let mut documents: Vec<PathBuf> = ROOT_DOCUMENTS.iter().map(|d| root.join(d)).collect();

    let skills_dir = root.join(SKILLS_DIR);
    if skills_dir.is_dir() {
        for entry in WalkDir::new(&skills_dir)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
        {
            let entry = entry.map_err(|source| ScanError::ListSkills {
                path: skills_dir.clone(),
                source,
            })?;

            let skill_md = entry.path().join(SKILL_FILE);
            if skill_md.exists() {
                documents.push(skill_md);
            }
        }
    }

    Ok(ScanList { documents })
}
