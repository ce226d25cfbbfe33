//! Core module - Contains the fundamental data structures and utilities
//!
//! This module provides:
//! - Reference and report model
//! - Environment error taxonomy
//! - Path normalization and repo-root detection
//! - Rendering of scan reports
//! - Common utilities

pub mod error;
pub mod model;
pub mod paths;
pub mod render;
pub mod util;
