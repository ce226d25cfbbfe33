//! Reference model
//!
//! Everything here lives for a single run: candidates are extracted from a
//! document, checked, and the broken ones accumulate into a [`ScanReport`].

use std::fmt;
use std::path::{Path, PathBuf};

/// A candidate path reference found in a document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reference {
    /// Raw path text as it appears in the document
    pub path: String,

    /// Byte offset of the reference within the document
    pub offset: usize,
}

impl Reference {
    pub fn new(path: impl Into<String>, offset: usize) -> Self {
        Self {
            path: path.into(),
            offset,
        }
    }
}

/// A reference that resolves neither from the repo root nor from its document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrokenReference {
    /// Document path relative to root, using '/' as separator
    pub document: String,

    /// 1-indexed line of the first occurrence
    pub line: usize,

    /// Normalized reference path
    pub path: String,
}

impl fmt::Display for BrokenReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  {}:{}: missing → {}", self.document, self.line, self.path)
    }
}

/// Result of one full run
#[derive(Debug, Clone)]
pub struct ScanReport {
    pub root: PathBuf,

    /// Number of documents that existed and were checked
    pub scanned: usize,

    /// Broken references, in scan order
    pub broken: Vec<BrokenReference>,
}

impl ScanReport {
    pub fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
            scanned: 0,
            broken: Vec::new(),
        }
    }

    pub fn is_clean(&self) -> bool {
        self.broken.is_empty()
    }
}
