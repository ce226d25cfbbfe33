//! Common utilities

/// 1-indexed line number of a byte offset: one plus the newlines before it.
///
/// Offsets past the end count every newline in the text; offsets inside a
/// multi-byte character are moved back to its start.
pub fn line_number_at(content: &str, offset: usize) -> usize {
    let mut end = offset.min(content.len());
    while end > 0 && !content.is_char_boundary(end) {
        end -= 1;
    }

    content.as_bytes()[..end]
        .iter()
        .filter(|&&b| b == b'\n')
        .count()
        + 1
}

/// Strip a single leading `./`. Other leading dots (e.g. `.github/`) are kept.
pub fn strip_current_dir(path: &str) -> &str {
    path.strip_prefix("./").unwrap_or(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_number_first_line() {
        assert_eq!(line_number_at("skills/a.md", 0), 1);
        assert_eq!(line_number_at("", 0), 1);
    }

    #[test]
    fn test_line_number_after_newlines() {
        let content = "one\ntwo\nthree";
        assert_eq!(line_number_at(content, 4), 2);
        assert_eq!(line_number_at(content, 8), 3);
        // The newline itself still belongs to the line it ends
        assert_eq!(line_number_at(content, 3), 1);
    }

    #[test]
    fn test_line_number_out_of_range() {
        assert_eq!(line_number_at("a\nb\n", 100), 3);
    }

    #[test]
    fn test_line_number_utf8() {
        let content = "→\nx";
        assert_eq!(line_number_at(content, 1), 1);
        assert_eq!(line_number_at(content, 4), 2);
    }

    #[test]
    fn test_strip_current_dir() {
        assert_eq!(strip_current_dir("./docs/a.md"), "docs/a.md");
        assert_eq!(strip_current_dir(".github/workflows/ci.yml"), ".github/workflows/ci.yml");
        assert_eq!(strip_current_dir("././a.md"), "./a.md");
        assert_eq!(strip_current_dir("../a.md"), "../a.md");
    }
}
