//! Reference extraction
//!
//! Three independent passes over the same text, concatenated in this order:
//! 1. markdown links: `[label](target)`
//! 2. inline paths under a known top-level dir: `skills/demo/SKILL.md`
//! 3. backticked directories: `` `skills/demo/` ``
//!
//! The same path may come out of more than one pass; callers dedupe.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::model::Reference;

/// Top-level directories whose paths are picked up outside of markdown links
pub const TOP_LEVEL_DIRS: &[&str] = &[
    "skills",
    "subagents",
    "commands",
    "rules",
    "languages",
    "mcp",
    "docs",
    "templates",
    "scripts",
];

/// Hidden CI-config directory, matched by the inline-path pass only
pub const CI_DIR: &str = ".github";

/// Link target prefixes that never name a local file
const EXTERNAL_PREFIXES: &[&str] = &["http", "mailto", "#"];

/// Format: [label](target)
pub static MARKDOWN_LINK_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\[([^\]]*)\]\(([^)]+)\)").expect("Invalid MARKDOWN_LINK_RE regex")
});

/// A path under a known dir ending in a 1-5 letter extension, delimited by
/// whitespace, quotes, backticks or line boundaries
pub static INLINE_PATH_RE: Lazy<Regex> = Lazy::new(|| {
    let mut dirs: Vec<String> = TOP_LEVEL_DIRS.iter().map(|d| regex::escape(d)).collect();
    dirs.push(regex::escape(CI_DIR));

    Regex::new(&format!(
        r#"(?m)(?:^|\s|`|'|")((?:{})/[a-zA-Z0-9_\-./]+\.[a-zA-Z]{{1,5}})(?:\s|`|'|"|$)"#,
        dirs.join("|")
    ))
    .expect("Invalid INLINE_PATH_RE regex")
});

/// Format: `dir/sub/` (trailing slash required)
pub static BARE_DIR_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"`((?:{})/[a-zA-Z0-9_\-./]+/)`",
        TOP_LEVEL_DIRS.join("|")
    ))
    .expect("Invalid BARE_DIR_RE regex")
});

/// Extract all candidate references from a document, pass by pass
pub fn extract_references(content: &str) -> Vec<Reference> {
    let mut refs = markdown_links(content);
    refs.extend(inline_paths(content));
    refs.extend(bare_dirs(content));
    refs
}

/// Local link targets, with any `#fragment` dropped
pub fn markdown_links(content: &str) -> Vec<Reference> {
    MARKDOWN_LINK_RE
        .captures_iter(content)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let target = caps.get(2)?.as_str();
            let path = target.split('#').next().unwrap_or_default().trim();

            if path.is_empty() || EXTERNAL_PREFIXES.iter().any(|p| path.starts_with(p)) {
                return None;
            }
            Some(Reference::new(path, whole.start()))
        })
        .collect()
}

/// Path-looking tokens in prose or inline code
pub fn inline_paths(content: &str) -> Vec<Reference> {
    INLINE_PATH_RE
        .captures_iter(content)
        .filter_map(|caps| {
            // Offset of the path itself: the leading delimiter may be a newline
            let path = caps.get(1)?;
            let trimmed = path.as_str().trim();
            (!trimmed.is_empty()).then(|| Reference::new(trimmed, path.start()))
        })
        .collect()
}

/// Backticked directory references, trailing slash stripped
pub fn bare_dirs(content: &str) -> Vec<Reference> {
    BARE_DIR_RE
        .captures_iter(content)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let dir = caps.get(1)?.as_str().trim_end_matches('/');
            Some(Reference::new(dir, whole.start()))
        })
        .collect()
}
