//! Contact-field extractors. Each one is total: absence falls back to a
//! placeholder, or to `None` for the two optional links.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::extraction::cascade::{capture1, first_match, group1, Matcher};

pub const DEFAULT_NAME: &str = "Professional Name";
pub const DEFAULT_EMAIL: &str = "email@example.com";
pub const DEFAULT_PHONE: &str = "(555) 123-4567";
pub const DEFAULT_LOCATION: &str = "City, State";

static NAME_LINE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^([A-Z][a-z]+ [A-Z][a-z]+)").unwrap());

static NAME_LABEL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)name:?\s*([A-Z][a-z]+ [A-Z][a-z]+)").unwrap());

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,})").unwrap()
});

static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\(\d{3}\)[-.\s]?\d{3}[-.\s]?\d{4}|\d{3}[-.\s]?\d{3}[-.\s]?\d{4})").unwrap()
});

// Words stay on one line; the state code must be a whole word.
static CITY_STATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b([A-Z][a-z]+(?:[ \t]+[A-Z][a-z]+)*,[ \t]*[A-Z]{2})\b").unwrap()
});

static MAJOR_CITY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(San Francisco|New York|Los Angeles|Chicago|Boston|Seattle|Austin|Denver|Miami|Atlanta|Dallas|Phoenix)",
    )
    .unwrap()
});

static LINKEDIN_URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)linkedin\.com/in/([a-zA-Z0-9-]+)").unwrap());

static LINKEDIN_LABEL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)linkedin:?\s*([a-zA-Z0-9-]+)").unwrap());

static URL_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)(https?://\S+)").unwrap());

static BARE_DOMAIN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)([a-zA-Z0-9-]+\.(?:com|dev|io|net|org))").unwrap());

pub fn extract_name(text: &str) -> String {
    let rules = [
        Matcher::new(&NAME_LINE_RE, group1),
        Matcher::new(&NAME_LABEL_RE, group1),
    ];
    first_match(text, &rules).unwrap_or_else(|| DEFAULT_NAME.to_string())
}

pub fn extract_email(text: &str) -> String {
    capture1(&EMAIL_RE, text).unwrap_or_else(|| DEFAULT_EMAIL.to_string())
}

pub fn extract_phone(text: &str) -> String {
    capture1(&PHONE_RE, text).unwrap_or_else(|| DEFAULT_PHONE.to_string())
}

pub fn extract_location(text: &str) -> String {
    let rules = [
        Matcher::new(&CITY_STATE_RE, group1),
        Matcher::new(&MAJOR_CITY_RE, group1),
    ];
    first_match(text, &rules).unwrap_or_else(|| DEFAULT_LOCATION.to_string())
}

fn linkedin_profile(caps: &Captures) -> Option<String> {
    caps.get(1)
        .map(|handle| format!("linkedin.com/in/{}", handle.as_str()))
}

/// Always returns the canonical `linkedin.com/in/<handle>` form.
pub fn extract_linkedin(text: &str) -> Option<String> {
    let rules = [
        Matcher::new(&LINKEDIN_URL_RE, linkedin_profile),
        Matcher::new(&LINKEDIN_LABEL_RE, linkedin_profile),
    ];
    first_match(text, &rules)
}

pub fn extract_website(text: &str) -> Option<String> {
    let rules = [Matcher::new(&URL_RE, group1), Matcher::new(&BARE_DOMAIN_RE, group1)];
    first_match(text, &rules)
}
