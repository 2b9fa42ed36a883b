//! Text Normalizer — strips noise from extracted resume text and bounds its
//! size before classification and prompting.
//!
//! The steps are order-sensitive: URLs and emails must be removed before the
//! character-class filter, otherwise the `.` and `-` in domain names would
//! survive as stray tokens. The word-count truncation runs last so both the
//! classifier and the model see bounded-cost input.

use regex::Regex;
use std::sync::LazyLock;

/// Upper bound on the number of whitespace-separated tokens kept.
pub const DEFAULT_MAX_WORDS: usize = 2000;

static LINE_BREAKS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\r\n|\r|\n)+").unwrap());
static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());
static URL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"http\S+|www\S+").unwrap());
static EMAIL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\S+@\S+").unwrap());
static NON_TEXT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^\w\s\.\-]").unwrap());

/// Normalizes raw resume text: single-spaced, free of URLs, emails and
/// non-word symbols, truncated to `max_words` tokens.
///
/// Pure and total — never fails on any input, and idempotent:
/// `normalize(normalize(t), n) == normalize(t, n)`.
pub fn normalize(text: &str, max_words: usize) -> String {
    let text = LINE_BREAKS.replace_all(text, " ");
    let text = WHITESPACE.replace_all(&text, " ");
    let text = URL.replace_all(&text, "");
    let text = EMAIL.replace_all(&text, "");
    let text = NON_TEXT.replace_all(&text, " ");
    let text = text.trim();

    let words: Vec<&str> = text.split_whitespace().collect();
    if words.len() > max_words {
        words[..max_words].join(" ")
    } else {
        // Symbol replacement may have introduced fresh whitespace runs;
        // rejoining keeps the single-space invariant.
        words.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapses_line_breaks_and_whitespace_runs() {
        let out = normalize("John\r\nDoe\n\n\nEngineer   at\tAcme", DEFAULT_MAX_WORDS);
        assert_eq!(out, "John Doe Engineer at Acme");
    }

    #[test]
    fn test_removes_urls_and_emails() {
        let input = "Check out http://example.com and www.test.com, contact me at a@b.com!!  ";
        let out = normalize(input, DEFAULT_MAX_WORDS);
        assert!(!out.contains("http://example.com"));
        assert!(!out.contains("www.test.com"));
        assert!(!out.contains("a@b.com"));
        assert_eq!(out, "Check out and contact me at");
    }

    #[test]
    fn test_replaces_symbols_but_keeps_dots_and_hyphens() {
        let out = normalize("C++ & Node.js (full-stack)!", DEFAULT_MAX_WORDS);
        assert_eq!(out, "C Node.js full-stack");
    }

    #[test]
    fn test_truncates_to_max_words() {
        let input = "one two three four five";
        assert_eq!(normalize(input, 3), "one two three");
        assert_eq!(normalize(input, 5), input);
        assert_eq!(normalize(input, 100), input);
    }

    #[test]
    fn test_token_count_never_exceeds_max_words() {
        let input = "word ".repeat(500);
        let out = normalize(&input, 42);
        assert_eq!(out.split_whitespace().count(), 42);
    }

    #[test]
    fn test_idempotent() {
        let inputs = [
            "Check out http://example.com and www.test.com, contact me at a@b.com!!  ",
            "plain text already",
            "  \r\n\t  ",
            "C++ & Node.js (full-stack)!",
        ];
        for input in inputs {
            let once = normalize(input, DEFAULT_MAX_WORDS);
            let twice = normalize(&once, DEFAULT_MAX_WORDS);
            assert_eq!(once, twice, "normalize not idempotent for {input:?}");
        }
    }

    #[test]
    fn test_total_on_empty_and_whitespace_input() {
        assert_eq!(normalize("", DEFAULT_MAX_WORDS), "");
        assert_eq!(normalize("   \n\r\n  ", DEFAULT_MAX_WORDS), "");
    }

    #[test]
    fn test_trims_leading_and_trailing_whitespace() {
        assert_eq!(normalize("  hello world  ", DEFAULT_MAX_WORDS), "hello world");
    }
}
