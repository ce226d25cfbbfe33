//! Validate driver
//!
//! Builds the scan list, checks every existing document and prints the report.

use anyhow::Result;
use std::path::Path;
use std::process::ExitCode;

use crate::backends::scan::build_scan_list;
use crate::core::model::ScanReport;
use crate::core::paths::{display_relative, RootSource};
use crate::core::render::{RenderConfig, Renderer};
use crate::refs::check::check_document;

/// Check every document in the scan list, accumulating broken references
pub fn validate(root: &Path, renderer: &Renderer) -> Result<ScanReport> {
    let scan_list = build_scan_list(root)?;
    let mut report = ScanReport::new(root);

    for doc in &scan_list.documents {
        let relative = display_relative(doc, root);

        if !doc.exists() {
            renderer.log(format!("skip {} (not found)", relative));
            continue;
        }

        let broken = check_document(root, doc)?;
        renderer.log(format!("checked {} ({} broken)", relative, broken.len()));

        report.scanned += 1;
        report.broken.extend(broken);
    }

    Ok(report)
}

/// Run the check and map the outcome to the process exit status
pub fn run_validate(root: &Path, source: RootSource, config: RenderConfig) -> Result<ExitCode> {
    let renderer = Renderer::with_config(config);

    print!("{}", renderer.render_root(root));
    renderer.log(format!("root from {}", source.describe()));

    let report = validate(root, &renderer)?;
    print!("{}", renderer.render_summary(&report));

    if report.is_clean() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
