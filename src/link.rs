// src/link.rs
// =============================================================================
// This module defines the Link record and the rules that decide whether a
// link is worth printing and following.
//
// A Link is created by the anchor extractor when an </a> closes, checked by
// is_valid(), printed, and then (maybe) followed. Nothing keeps links around
// after that.
//
// Rust concepts:
// - Private fields + read-only accessors: a Link can't be changed once built
// - Display trait: lets us write `println!("{}", link)`
// - Serialize derive: lets serde_json turn a Link into a JSON object
// =============================================================================

use serde::Serialize;
use std::fmt;

/// Pseudo-protocol we never follow (matched case-insensitively, anywhere in the URL).
const SCRIPT_PSEUDO_PROTOCOL: &str = "javascript";

/// One anchor found on a page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    /// The raw href, trimmed, never resolved against the page URL
    url: String,
    /// All text found between <a ...> and </a>, trimmed
    text: String,
    /// Depth of the page the anchor was found on (the seed page is 0)
    depth: usize,
}

impl Link {
    /// Builds a link, trimming surrounding whitespace from url and text.
    pub fn new(url: &str, text: &str, depth: usize) -> Self {
        Link {
            url: url.trim().to_string(),
            text: text.trim().to_string(),
            depth,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Returns true if this link should be printed and followed.
    ///
    /// A link is rejected when:
    /// - it sits at or beyond the depth ceiling (checked first, it's cheapest)
    /// - its text is empty
    /// - its url is empty
    /// - its url mentions the javascript pseudo-protocol (any letter case)
    pub fn is_valid(&self, max_depth: usize) -> bool {
        if self.depth >= max_depth {
            return false;
        }
        if self.text.is_empty() {
            return false;
        }
        if self.url.is_empty() {
            return false;
        }
        !fold_case(&self.url).contains(SCRIPT_PSEUDO_PROTOCOL)
    }
}

// Lower-cases one char at a time, keeping only the first char of each mapping,
// so 'İ' (U+0130) becomes plain 'i' instead of "i\u{307}"
fn fold_case(value: &str) -> String {
    value
        .chars()
        .map(|c| c.to_lowercase().next().unwrap_or(c))
        .collect()
}

// Renders the output line: one tab per depth level, then "<text> (<depth>) - <url>"
impl fmt::Display for Link {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let indent = "\t".repeat(self.depth);
        write!(f, "{}{} ({}) - {}", indent, self.text, self.depth, self.url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_trims_fields() {
        let link = Link::new("  https://example.com/  ", "\n  Example \t", 1);
        assert_eq!(link.url, "https://example.com/");
        assert_eq!(link.text, "Example");
        assert_eq!(link.depth, 1);
    }

    #[test]
    fn test_valid_link() {
        let link = Link::new("https://example.com", "Example", 0);
        assert!(link.is_valid(3));
    }

    #[test]
    fn test_rejects_depth_at_or_beyond_ceiling() {
        for depth in 3..10 {
            let link = Link::new("https://example.com", "Example", depth);
            assert!(!link.is_valid(3), "depth {} should be rejected", depth);
        }
        // Ceiling of zero rejects everything, even the seed page's links
        assert!(!Link::new("https://example.com", "Example", 0).is_valid(0));
    }

    #[test]
    fn test_rejects_empty_text_or_url() {
        assert!(!Link::new("https://example.com", "", 0).is_valid(3));
        assert!(!Link::new("https://example.com", "   ", 0).is_valid(3));
        assert!(!Link::new("", "Example", 0).is_valid(3));
        assert!(!Link::new("", "", 0).is_valid(3));
    }

    #[test]
    fn test_rejects_javascript_in_any_case_anywhere() {
        for url in [
            "javascript:void(0)",
            "JavaScript:alert(1)",
            "JAVASCRIPT:",
            "https://example.com/docs/javascript/intro",
            "/learn-JavaScript",
        ] {
            let link = Link::new(url, "Click", 0);
            assert!(!link.is_valid(3), "{} should be rejected", url);
        }
    }

    #[test]
    fn test_rejects_javascript_with_non_ascii_capitals() {
        for url in ["javascrİpt:alert(1)", "JAVASCRİPT:void(0)"] {
            let link = Link::new(url, "Click", 0);
            assert!(!link.is_valid(3), "{} should be rejected", url);
        }
    }

    #[test]
    fn test_fold_case() {
        assert_eq!(fold_case("JavaScrİpt"), "javascript");
        assert_eq!(fold_case("ÀB/ç"), "àb/ç");
    }

    #[test]
    fn test_display_indents_by_depth() {
        assert_eq!(
            Link::new("https://a.example", "Home", 0).to_string(),
            "Home (0) - https://a.example"
        );
        assert_eq!(
            Link::new("/about", "About us", 2).to_string(),
            "\t\tAbout us (2) - /about"
        );
    }

    #[test]
    fn test_serializes_to_json_object() {
        let link = Link::new("/docs", "Docs", 1);
        let json = serde_json::to_string(&link).unwrap();
        assert_eq!(json, r#"{"url":"/docs","text":"Docs","depth":1}"#);
    }
}
