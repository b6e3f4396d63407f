//! Last-resort text harvesting for PDFs that defeat real extraction.
//!
//! Scans the raw bytes for the literal-string and text-block shapes that
//! uncompressed PDF content streams use. Output is noisy but often enough to
//! clear the minimum-length gate when both the model and the PDF parser
//! come back empty.

use once_cell::sync::Lazy;
use regex::Regex;

static PAREN_LITERALS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\(([^)]+)\)").unwrap());
static BRACKET_LITERALS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[([^\]]+)\]").unwrap());
static TEXT_BLOCKS: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)BT\s+(.*?)\s+ET").unwrap());
static NON_PRINTABLE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\x20-\x7E\n]").unwrap());
static WHITESPACE_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Harvests whatever readable fragments the raw bytes contain.
/// Returns a whitespace-collapsed string; may be empty.
pub fn harvest_text(bytes: &[u8]) -> String {
    let raw = String::from_utf8_lossy(bytes);

    let mut collected = String::new();
    for pattern in [&PAREN_LITERALS, &BRACKET_LITERALS, &TEXT_BLOCKS] {
        for capture in pattern.captures_iter(&raw) {
            if let Some(group) = capture.get(1) {
                collected.push_str(group.as_str());
                collected.push(' ');
            }
        }
    }

    let printable = NON_PRINTABLE.replace_all(&collected, " ");
    WHITESPACE_RUNS.replace_all(&printable, " ").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_harvests_parenthesized_literals() {
        let bytes = b"garbage (Jane Doe) more garbage (Software Engineer) end";
        let text = harvest_text(bytes);
        assert!(text.contains("Jane Doe"));
        assert!(text.contains("Software Engineer"));
    }

    #[test]
    fn test_harvests_text_blocks() {
        let bytes = b"prefix BT /F1 12 Tf Experienced developer ET suffix";
        let text = harvest_text(bytes);
        assert!(text.contains("Experienced developer"));
    }

    #[test]
    fn test_strips_non_printable_bytes() {
        let bytes = b"(abc\x01\x02def)";
        let text = harvest_text(bytes);
        assert_eq!(text, "abc def");
    }

    #[test]
    fn test_collapses_whitespace() {
        let bytes = b"(a   b) (c\t\td)";
        assert_eq!(harvest_text(bytes), "a b c d");
    }

    #[test]
    fn test_no_matches_yields_empty() {
        assert_eq!(harvest_text(b"no delimiters here at all"), "");
    }
}
