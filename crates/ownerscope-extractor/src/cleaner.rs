//! Reply text cleaning

use regex::Regex;
use std::sync::LazyLock;

// Bracketed numeric citation markers, e.g. "[1]", "[23]"
static RE_CITATION: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[\d+\]").unwrap());

static RE_WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Prepare raw reply content for parsing.
///
/// Removes citation markers (which break JSON formatting), collapses all
/// whitespace runs including newlines into single spaces, and trims the
/// ends. Total function of its input.
///
/// # Examples
///
/// ```
/// use ownerscope_extractor::clean_content;
///
/// let cleaned = clean_content("Acme[1] was founded\n  in 1999.[12]  ");
/// assert_eq!(cleaned, "Acme was founded in 1999.");
/// ```
pub fn clean_content(content: &str) -> String {
    let without_citations = RE_CITATION.replace_all(content, "");
    let collapsed = RE_WHITESPACE.replace_all(&without_citations, " ");
    collapsed.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_citation_markers() {
        assert_eq!(clean_content("Acme[1] Corp[42]"), "Acme Corp");
    }

    #[test]
    fn test_keeps_non_numeric_brackets() {
        assert_eq!(clean_content("[note] Acme"), "[note] Acme");
    }

    #[test]
    fn test_collapses_whitespace_and_newlines() {
        assert_eq!(
            clean_content("line one\n\nline   two\r\n\tline three"),
            "line one line two line three"
        );
    }

    #[test]
    fn test_trims_ends() {
        assert_eq!(clean_content("  padded  "), "padded");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(clean_content(""), "");
        assert_eq!(clean_content("   \n  "), "");
    }

    #[test]
    fn test_idempotent_on_clean_text() {
        let text = "already clean text.";
        assert_eq!(clean_content(text), text);
        assert_eq!(clean_content(&clean_content(text)), text);
    }
}
