//! Wildcard pattern compilation for text-column filtering.
//!
//! Filter text is compiled to a pattern anchored at the start of the value,
//! where `*` matches any sequence of characters. Only the FIRST `*` is
//! expanded; later ones match themselves literally. This single-substitution
//! behavior is a documented compatibility limitation, not an oversight.

use regex::Regex;

use crate::error::{GridFilterError, Result};

/// A compiled anchored-at-start wildcard pattern.
#[derive(Debug, Clone)]
pub struct WildcardPattern {
    /// The raw filter text the pattern was compiled from.
    filter_text: String,
    /// The compiled regex for matching.
    regex: Regex,
}

impl WildcardPattern {
    /// Compile filter text into an anchored pattern.
    pub fn compile<S: Into<String>>(filter_text: S) -> Result<Self> {
        let filter_text = filter_text.into();
        let regex = Self::build_regex(&filter_text)?;

        Ok(WildcardPattern { filter_text, regex })
    }

    /// Get the raw filter text.
    pub fn filter_text(&self) -> &str {
        &self.filter_text
    }

    /// Check whether a value matches the pattern at its start.
    pub fn matches(&self, value: &str) -> bool {
        self.regex.is_match(value)
    }

    fn build_regex(filter_text: &str) -> Result<Regex> {
        let mut regex_pattern = String::with_capacity(filter_text.len() + 4);
        regex_pattern.push('^'); // Match from the beginning
        let mut expanded = false;

        for c in filter_text.chars() {
            match c {
                '*' if !expanded => {
                    regex_pattern.push_str(".*");
                    expanded = true;
                }
                // Regex special characters (and any later `*`) are literal
                '^' | '$' | '.' | '*' | '+' | '?' | '(' | ')' | '[' | ']' | '{' | '}' | '|'
                | '\\' => {
                    regex_pattern.push('\\');
                    regex_pattern.push(c);
                }
                c => {
                    regex_pattern.push(c);
                }
            }
        }

        Regex::new(&regex_pattern)
            .map_err(|e| GridFilterError::pattern(format!("invalid wildcard pattern: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wildcard_matches_at_start() {
        let pattern = WildcardPattern::compile("ab*cd").unwrap();
        assert!(pattern.matches("abXYZcd"));
        assert!(pattern.matches("abcd and more"));
        assert!(!pattern.matches("XYZabcd"));
        assert!(!pattern.matches("ab"));
    }

    #[test]
    fn test_no_wildcard_is_prefix_match() {
        let pattern = WildcardPattern::compile("abc").unwrap();
        assert!(pattern.matches("abc"));
        assert!(pattern.matches("abcdef"));
        assert!(!pattern.matches("zabc"));
    }

    #[test]
    fn test_only_first_star_expands() {
        // Single-substitution limitation: the second `*` stays literal.
        let pattern = WildcardPattern::compile("a*b*c").unwrap();
        assert!(pattern.matches("aXXXb*c"));
        assert!(!pattern.matches("aXXXbYYYc"));
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        let pattern = WildcardPattern::compile("").unwrap();
        assert!(pattern.matches(""));
        assert!(pattern.matches("anything"));
    }

    #[test]
    fn test_special_regex_characters_are_literal() {
        let pattern = WildcardPattern::compile("a.c").unwrap();
        assert!(pattern.matches("a.c"));
        assert!(!pattern.matches("abc"));

        let pattern = WildcardPattern::compile("x+y").unwrap();
        assert!(pattern.matches("x+y"));
        assert!(!pattern.matches("xxy"));

        let pattern = WildcardPattern::compile("q?").unwrap();
        assert!(pattern.matches("q?"));
        assert!(!pattern.matches("q"));
    }

    #[test]
    fn test_filter_text_accessor() {
        let pattern = WildcardPattern::compile("he*o").unwrap();
        assert_eq!(pattern.filter_text(), "he*o");
    }
}
