//! Ordered matcher cascades — the first rule whose pattern matches wins.

use regex::{Captures, Regex};

/// A single rule in a cascade: a pattern plus how to turn its captures into a value.
/// The transform may still reject a match by returning `None`.
pub struct Matcher<T = String> {
    pub pattern: &'static Regex,
    pub transform: fn(&Captures) -> Option<T>,
}

impl<T> Matcher<T> {
    pub fn new(pattern: &'static Regex, transform: fn(&Captures) -> Option<T>) -> Self {
        Self { pattern, transform }
    }

    /// Applies the rule to the leftmost match in `text`.
    pub fn apply(&self, text: &str) -> Option<T> {
        self.pattern
            .captures(text)
            .and_then(|caps| (self.transform)(&caps))
    }
}

/// Evaluates `matchers` in order and returns the first produced value.
pub fn first_match<T>(text: &str, matchers: &[Matcher<T>]) -> Option<T> {
    matchers.iter().find_map(|m| m.apply(text))
}

/// Transform returning capture group 1 verbatim.
pub fn group1(caps: &Captures) -> Option<String> {
    caps.get(1).map(|m| m.as_str().to_string())
}

/// Returns capture group 1 of the leftmost match, if any.
pub fn capture1(pattern: &Regex, text: &str) -> Option<String> {
    pattern.captures(text).as_ref().and_then(group1)
}

#[cfg(test)]
mod tests {
    use std::sync::LazyLock;

    use super::*;

    static DIGITS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\d+)").unwrap());
    static WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"([a-z]+)").unwrap());

    fn shout(caps: &Captures) -> Option<String> {
        caps.get(1).map(|m| m.as_str().to_uppercase())
    }

    #[test]
    fn test_first_rule_wins_even_if_later_rule_matches_earlier_text() {
        let rules = [Matcher::new(&DIGITS, group1), Matcher::new(&WORD, shout)];
        assert_eq!(first_match("abc 123", &rules).as_deref(), Some("123"));
    }

    #[test]
    fn test_falls_through_to_next_rule() {
        let rules = [Matcher::new(&DIGITS, group1), Matcher::new(&WORD, shout)];
        assert_eq!(first_match("abc def", &rules).as_deref(), Some("ABC"));
    }

    #[test]
    fn test_no_rule_matches() {
        let rules = [Matcher::new(&DIGITS, group1)];
        assert_eq!(first_match("", &rules), None);
    }

    #[test]
    fn test_capture1_takes_leftmost() {
        assert_eq!(capture1(&DIGITS, "a 12 b 34").as_deref(), Some("12"));
    }
}
