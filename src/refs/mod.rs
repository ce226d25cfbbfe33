//! Refs module - Find and verify path references in documents
//!
//! - extract: pull candidate paths out of markdown text
//! - check: resolve candidates against the repo root and the document's directory
//! - validate: scan every document in the scan list and report

pub mod check;
pub mod extract;
pub mod validate;
