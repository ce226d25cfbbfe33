//! Renderer module
//!
//! Renders a ScanReport as the human-readable summary printed on stdout, and
//! writes verbose diagnostics to stderr.

use colored::Colorize;
use std::path::Path;

use crate::core::model::ScanReport;

/// Render configuration
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderConfig {
    /// Colorize the summary header lines
    pub color: bool,
    /// Emit diagnostics on stderr
    pub verbose: bool,
}

impl RenderConfig {
    pub fn new(color: bool, verbose: bool) -> Self {
        Self { color, verbose }
    }
}

/// Renderer for scan reports
pub struct Renderer {
    config: RenderConfig,
}

impl Renderer {
    pub fn with_config(config: RenderConfig) -> Self {
        Self { config }
    }

    /// The `Repo root:` line printed before scanning starts
    pub fn render_root(&self, root: &Path) -> String {
        format!("Repo root: {}\n", root.display())
    }

    /// Summary printed after all documents have been checked
    pub fn render_summary(&self, report: &ScanReport) -> String {
        let mut output = String::new();

        if report.is_clean() {
            let line = format!(
                "✓ All references valid (scanned {} files)",
                report.scanned
            );
            output.push_str(&self.paint(line, false));
            output.push('\n');
            return output;
        }

        let header = format!("❌ Found {} broken reference(s):", report.broken.len());
        output.push('\n');
        output.push_str(&self.paint(header, true));
        output.push_str("\n\n");
        for broken in &report.broken {
            output.push_str(&broken.to_string());
            output.push('\n');
        }
        output
    }

    /// Full stdout for a finished run
    #[allow(dead_code)]
    pub fn render(&self, report: &ScanReport) -> String {
        let mut output = self.render_root(&report.root);
        output.push_str(&self.render_summary(report));
        output
    }

    /// Write a diagnostic line to stderr (verbose mode only)
    pub fn log(&self, message: impl AsRef<str>) {
        if self.config.verbose {
            eprintln!("[refcheck] {}", message.as_ref());
        }
    }

    fn paint(&self, text: String, failure: bool) -> String {
        if !self.config.color {
            return text;
        }
        if failure {
            text.red().bold().to_string()
        } else {
            text.green().to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::BrokenReference;

    fn plain() -> Renderer {
        Renderer::with_config(RenderConfig::new(false, false))
    }

    #[test]
    fn test_render_success() {
        let mut report = ScanReport::new(Path::new("/repo"));
        report.scanned = 4;

        assert_eq!(
            plain().render(&report),
            "Repo root: /repo\n✓ All references valid (scanned 4 files)\n"
        );
    }

    #[test]
    fn test_render_failure() {
        let mut report = ScanReport::new(Path::new("/repo"));
        report.scanned = 1;
        report.broken.push(BrokenReference {
            document: "README.md".to_string(),
            line: 1,
            path: "skills/foo/SKILL.md".to_string(),
        });
        report.broken.push(BrokenReference {
            document: "skills/demo/SKILL.md".to_string(),
            line: 7,
            path: "docs/gone".to_string(),
        });

        let expected = concat!(
            "Repo root: /repo\n",
            "\n",
            "❌ Found 2 broken reference(s):\n",
            "\n",
            "  README.md:1: missing → skills/foo/SKILL.md\n",
            "  skills/demo/SKILL.md:7: missing → docs/gone\n",
        );
        assert_eq!(plain().render(&report), expected);
    }

    #[test]
    fn test_render_without_color_has_no_escapes() {
        let report = ScanReport::new(Path::new("/repo"));
        assert!(!plain().render_summary(&report).contains('\x1b'));
    }
}
