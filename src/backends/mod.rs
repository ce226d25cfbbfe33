//! Backends module - Filesystem access
//!
//! Provides:
//! - scan: Scan-list assembly (fixed documents + skills/*/SKILL.md via walkdir)

pub mod scan;
