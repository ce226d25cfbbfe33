//! Reference checking
//!
//! A reference is valid when it exists (file or directory) relative to the
//! repo root, or failing that relative to its document's directory.

use anyhow::Result;
use std::collections::HashSet;
use std::path::Path;

use crate::core::error::ScanError;
use crate::core::model::{BrokenReference, Reference};
use crate::core::paths::{display_relative, normalize_lexically};
use crate::core::util::{line_number_at, strip_current_dir};
use crate::refs::extract::extract_references;

/// Read a document, extract its references and return the broken ones
pub fn check_document(root: &Path, doc_path: &Path) -> Result<Vec<BrokenReference>> {
    let content =
        std::fs::read_to_string(doc_path).map_err(|source| ScanError::ReadDocument {
            path: doc_path.to_path_buf(),
            source,
        })?;

    let refs = extract_references(&content);
    Ok(check_references(root, doc_path, &content, &refs))
}

/// Check extracted references against the filesystem.
///
/// Each normalized path is checked once per document; the first occurrence
/// decides the reported line.
pub fn check_references(
    root: &Path,
    doc_path: &Path,
    content: &str,
    refs: &[Reference],
) -> Vec<BrokenReference> {
    let doc_dir = doc_path.parent().unwrap_or(Path::new(""));
    let document = display_relative(doc_path, root);

    let mut seen: HashSet<&str> = HashSet::new();
    let mut broken = Vec::new();

    for reference in refs {
        let path = strip_current_dir(&reference.path);

        if !seen.insert(path) {
            continue;
        }

        if reference_exists(root, doc_dir, path) {
            continue;
        }

        broken.push(BrokenReference {
            document: document.clone(),
            line: line_number_at(content, reference.offset),
            path: path.to_string(),
        });
    }

    broken
}

/// Repo-root-relative first, then document-relative (lexically normalized)
pub fn reference_exists(root: &Path, doc_dir: &Path, path: &str) -> bool {
    if root.join(path).exists() {
        return true;
    }
    normalize_lexically(&doc_dir.join(path)).exists()
}
