//! Environment failures that abort a run
//!
//! Broken references are not errors here: they are collected into the report.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScanError {
    /// A scan-list document exists but could not be read as UTF-8 text
    #[error("failed to read document {}", .path.display())]
    ReadDocument {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The skills directory exists but could not be listed
    #[error("failed to list skills directory {}", .path.display())]
    ListSkills {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },
}
