//! Work-history extraction.
//!
//! A line naming a role (engineer, developer, manager, ...) is a job line when it
//! also splits into `<position> <sep> <Company>`. Duration and description are
//! then looked up around it.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::extraction::cascade::{capture1, first_match, Matcher};
use crate::models::resume::Experience;

pub const DEFAULT_DURATION: &str = "2020 - 2023";

pub const DEFAULT_DESCRIPTION: &str = "• Contributed to key projects and initiatives\n• Collaborated with team members to achieve goals\n• Applied technical skills to solve complex problems";

/// Lines on each side of a job line searched for a duration.
const DURATION_WINDOW: usize = 2;
/// Lines after a job line searched for description bullets.
const DESCRIPTION_LOOKAHEAD: usize = 4;
/// Non-bullet lines must be longer than this to count as description.
const MIN_PROSE_CHARS: usize = 20;

static ROLE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(engineer|developer|manager|analyst|designer|consultant|director|lead)")
        .unwrap()
});

static AT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(.+?)\s+(?:at|@)\s+([A-Z][a-zA-Z\s&.,]+)").unwrap()
});

static PIPE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(.+?)\s*\|\s*([A-Z][a-zA-Z\s&.,]+)").unwrap());

static DASH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(.+?)\s*[-–]\s*([A-Z][a-zA-Z\s&.,]+)").unwrap());

static YEAR_RANGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\d{4}[-\s]*(?:to|-)?\s*(?:\d{4}|present|current))").unwrap()
});

static LEADING_YEAR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d{4}").unwrap());

fn position_and_company(caps: &Captures) -> Option<(String, String)> {
    let position = caps.get(1)?.as_str().trim();
    let company = caps.get(2)?.as_str().trim();
    Some((position.to_string(), company.to_string()))
}

pub fn extract_experiences(text: &str) -> Vec<Experience> {
    let lines: Vec<&str> = text.split('\n').collect();
    let separators = [
        Matcher::new(&AT_RE, position_and_company),
        Matcher::new(&PIPE_RE, position_and_company),
        Matcher::new(&DASH_RE, position_and_company),
    ];

    let mut experiences = Vec::new();

    for (i, raw) in lines.iter().enumerate() {
        let line = raw.trim();
        if !ROLE_RE.is_match(line) {
            continue;
        }

        // A list marker in front of the title is not part of the position.
        let entry = line.trim_start_matches(['•', '-', '*']).trim_start();
        let Some((position, company)) = first_match(entry, &separators) else {
            continue;
        };

        experiences.push(Experience {
            company,
            position,
            duration: resolve_duration(&lines, i),
            description: resolve_description(&lines, i),
        });
    }

    experiences
}

/// Same line first, then the first year range within ±2 lines.
fn resolve_duration(lines: &[&str], index: usize) -> String {
    if let Some(duration) = capture1(&YEAR_RANGE_RE, lines[index]) {
        return duration;
    }

    let start = index.saturating_sub(DURATION_WINDOW);
    let end = (index + DURATION_WINDOW + 1).min(lines.len());
    lines[start..end]
        .iter()
        .find_map(|line| capture1(&YEAR_RANGE_RE, line))
        .unwrap_or_else(|| DEFAULT_DURATION.to_string())
}

fn resolve_description(lines: &[&str], index: usize) -> String {
    let end = (index + DESCRIPTION_LOOKAHEAD + 1).min(lines.len());
    let mut bullets = Vec::new();

    for raw in &lines[index + 1..end] {
        let line = raw.trim();
        if line.is_empty() || LEADING_YEAR_RE.is_match(line) || ROLE_RE.is_match(line) {
            break;
        }

        let is_bullet = line.starts_with('•') || line.starts_with('-');
        if is_bullet || line.chars().count() > MIN_PROSE_CHARS {
            bullets.push(as_bullet(line));
        }
    }

    if bullets.is_empty() {
        DEFAULT_DESCRIPTION.to_string()
    } else {
        bullets.join("\n")
    }
}

fn as_bullet(line: &str) -> String {
    let body = line.trim_start_matches(['•', '-']).trim_start();
    format!("• {body}")
}
