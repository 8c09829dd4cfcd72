//! Comment stripping for JSON-with-comments files.
//!
//! Dev container configurations are routinely annotated with `//` and
//! `/* */` comments, which `serde_json` rejects. [`strip_comments`] removes
//! them textually before parsing.
//!
//! # Limitations
//!
//! Stripping is pattern-based and knows nothing about JSON strings. A `//` or
//! `/*` inside a string value is treated as a comment start:
//!
//! ```
//! use ghcheck::config::jsonc::strip_comments;
//!
//! // The URL loses everything after "https:".
//! let stripped = strip_comments(r#"{"image": "https://example.com"}"#);
//! assert_eq!(stripped, r#"{"image": "https:"#);
//! ```
//!
//! Such files usually fail to parse afterwards and are reported as
//! malformed.

use regex::Regex;
use std::sync::LazyLock;

/// Line comments: `//` up to the end of the line.
static LINE_COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)//.*$").expect("LINE_COMMENT must compile"));

/// Block comments, shortest match, may span lines.
static BLOCK_COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)/\*.*?\*/").expect("BLOCK_COMMENT must compile"));

/// Remove `//` line comments, then `/* */` block comments.
pub fn strip_comments(content: &str) -> String {
    let without_lines = LINE_COMMENT.replace_all(content, "");
    BLOCK_COMMENT.replace_all(&without_lines, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_leading_line_comment() {
        let input = "// comment\n{\"a\": 1}";
        assert_eq!(strip_comments(input), "\n{\"a\": 1}");
    }

    #[test]
    fn strips_trailing_line_comment() {
        let input = "{\n  \"a\": 1 // the answer\n}";
        assert_eq!(strip_comments(input), "{\n  \"a\": 1 \n}");
    }

    #[test]
    fn strips_multiline_block_comment() {
        let input = "{/* one\n two */\"a\": 1}";
        assert_eq!(strip_comments(input), "{\"a\": 1}");
    }

    #[test]
    fn block_comments_are_non_greedy() {
        let input = "/* a */1,/* b */2";
        assert_eq!(strip_comments(input), "1,2");
    }

    #[test]
    fn leaves_plain_json_untouched() {
        let input = r#"{"name": "dev", "features": {}}"#;
        assert_eq!(strip_comments(input), input);
    }

    #[test]
    fn line_comment_marker_inside_string_is_stripped_too() {
        let input = "{\"url\": \"https://github.com\"}";
        assert_eq!(strip_comments(input), "{\"url\": \"https:");
    }

    #[test]
    fn line_comments_go_first() {
        // The `//` inside the block comment eats its closing marker.
        let input = "/* see // here */\n{}";
        assert_eq!(strip_comments(input), "/* see \n{}");
    }
}
