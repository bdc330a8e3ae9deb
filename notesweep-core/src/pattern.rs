//! Compiled date pattern and candidate matching
//!
//! The pattern is a recall-oriented net for numeric date shapes, not a
//! date grammar. Its second branch inherits a parenthesized leading
//! group from an older phone-number pattern; the mismatch is kept for
//! output compatibility.

use regex::Regex;

/// Date-like numeric substrings: `D{1,2} sep D{1,2}` with an optional
/// separator-plus-year tail (0-4 digits), or the legacy phone-shaped
/// branch `(D{1,2})* D{1,2} sep? D{0,4}`. Note `\)*` binds to the close
/// paren only.
const DATE_PATTERN: &str =
    r"\d{1,2}[-/]\d{1,2}[-.\s/]?\d{0,4}|\(\d{1,2}\)*\d{1,2}[-\s/]?\d{0,4}";

/// A single candidate match within a note chunk.
///
/// Offsets are 0-based character offsets relative to the untrimmed
/// chunk text, end exclusive, before any positional correction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateMatch<'t> {
    /// Character offset of the first matched character
    pub start: usize,
    /// Character offset one past the last matched character
    pub end: usize,
    /// The matched text
    pub text: &'t str,
}

/// Immutable holder for the compiled date pattern.
///
/// Constructed once at startup and shared by reference; there is no
/// mutable global state.
#[derive(Debug)]
pub struct DatePattern {
    regex: Regex,
}

impl DatePattern {
    /// Compile the date pattern
    pub fn new() -> Self {
        Self {
            regex: Regex::new(DATE_PATTERN).expect("date pattern is a valid regex"),
        }
    }

    /// Find every non-overlapping candidate in `chunk`, left to right.
    ///
    /// The returned iterator is lazy and can be recreated by calling
    /// this method again. The regex engine reports byte offsets; they
    /// are converted incrementally to character offsets so spans line
    /// up with the companion tooling's coordinate system.
    pub fn find_iter<'r, 't>(&'r self, chunk: &'t str) -> impl Iterator<Item = DateMatch<'t>> + 'r
    where
        't: 'r,
    {
        let mut byte_pos = 0usize;
        let mut char_pos = 0usize;
        self.regex.find_iter(chunk).map(move |m| {
            // Matches arrive in order, so counting resumes from the
            // previous match instead of rescanning the chunk.
            char_pos += chunk[byte_pos..m.start()].chars().count();
            let start = char_pos;
            char_pos += m.as_str().chars().count();
            byte_pos = m.end();
            DateMatch {
                start,
                end: char_pos,
                text: m.as_str(),
            }
        })
    }
}

impl Default for DatePattern {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matches<'t>(text: &'t str) -> Vec<DateMatch<'t>> {
        DatePattern::new().find_iter(text).collect()
    }

    #[test]
    fn test_full_date_with_two_digit_year() {
        let found = matches("02/14/05 visit");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0], DateMatch { start: 0, end: 8, text: "02/14/05" });
    }

    #[test]
    fn test_four_digit_year() {
        let found = matches("seen on 12-31-1999 at clinic");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].text, "12-31-1999");
        assert_eq!(found[0].start, 8);
        assert_eq!(found[0].end, 18);
    }

    #[test]
    fn test_yearless_date() {
        let found = matches("3/4");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].text, "3/4");
    }

    #[test]
    fn test_dot_separated_year() {
        let found = matches("5-6.2021");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].text, "5-6.2021");
    }

    #[test]
    fn test_phone_shaped_branch() {
        // Legacy branch: leading parenthesized group
        let found = matches("(12)3-4567");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].text, "(12)3-4567");
    }

    #[test]
    fn test_trailing_separator_without_year() {
        // The optional tail can consume a separator and zero digits
        let found = matches("12/25/");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].text, "12/25/");
    }

    #[test]
    fn test_non_overlapping_left_to_right() {
        let found = matches("1/2, and 3/4");
        let texts: Vec<&str> = found.iter().map(|m| m.text).collect();
        assert_eq!(texts, ["1/2", "3/4"]);
    }

    #[test]
    fn test_trailing_whitespace_separator_is_consumed() {
        // Whitespace is a valid tail separator, so a following space
        // joins the match even with zero year digits
        let found = matches("3/4 early");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].text, "3/4 ");
        assert_eq!(found[0].end, 4);
    }

    #[test]
    fn test_no_match_in_plain_text() {
        assert!(matches("no dates in this note").is_empty());
    }

    #[test]
    fn test_char_offsets_with_multibyte_text() {
        // "café " is 5 characters but 6 bytes
        let found = matches("café 1/2");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].start, 5);
        assert_eq!(found[0].end, 8);
    }

    #[test]
    fn test_iterator_is_restartable() {
        let pattern = DatePattern::new();
        let text = "02/14/05 and 3/4";
        let first: Vec<_> = pattern.find_iter(text).collect();
        let second: Vec<_> = pattern.find_iter(text).collect();
        assert_eq!(first, second);
    }
}
