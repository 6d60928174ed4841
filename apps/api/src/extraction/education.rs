//! Education extraction. Each candidate line yields exactly one record; unlike
//! work history there is no look-around across lines.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::extraction::cascade::{capture1, first_match, group1, Matcher};
use crate::models::resume::Education;

pub const BACHELORS: &str = "Bachelor's Degree";
pub const MASTERS: &str = "Master's Degree";
pub const DEFAULT_DEGREE: &str = "Bachelor of Science";
pub const DEFAULT_FIELD: &str = "Computer Science";
pub const DEFAULT_INSTITUTION: &str = "University";
pub const DEFAULT_DURATION: &str = "2015 - 2019";

/// Words that end a field of study, e.g. "Physics from MIT".
const FIELD_TERMINATORS: &[&str] = &["from", "at"];

static CANDIDATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(bachelor|master|phd|degree|university|college|bs|ms|ba|ma)").unwrap()
});

static DEGREE_IN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(bachelor|master|phd|bs|ms|ba|ma).*?\bin\s+([a-z][a-z\s]*)").unwrap()
});

static DEGREE_OF_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(bachelor|master|phd|bs|ms|ba|ma).*?\bof\s+([a-z][a-z\s]*)").unwrap()
});

static SCHOOL_AFTER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:from|at)\s+([A-Z][a-zA-Z\s]+(?:university|college|institute))").unwrap()
});

static SCHOOL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)([A-Z][a-zA-Z\s]+(?:university|college|institute))").unwrap()
});

// No "present" here, only closed ranges.
static YEAR_RANGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(\d{4}[-\s]*(?:to|-)?\s*\d{4})").unwrap());

static GPA_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)gpa:?\s*(\d\.\d)").unwrap());

fn normalize_degree(keyword: &str) -> &'static str {
    match keyword.to_lowercase().as_str() {
        "master" | "ms" | "ma" => MASTERS,
        _ => BACHELORS,
    }
}

/// Keeps the words before the first terminator; rejects an empty field.
fn trim_field(raw: &str) -> Option<String> {
    let words: Vec<&str> = raw
        .split_whitespace()
        .take_while(|word| {
            !FIELD_TERMINATORS
                .iter()
                .any(|t| word.eq_ignore_ascii_case(t))
        })
        .collect();

    if words.is_empty() {
        None
    } else {
        Some(words.join(" "))
    }
}

fn degree_and_field(caps: &Captures) -> Option<(&'static str, String)> {
    let degree = normalize_degree(caps.get(1)?.as_str());
    let field = trim_field(caps.get(2)?.as_str())?;
    Some((degree, field))
}

fn trimmed_group1(caps: &Captures) -> Option<String> {
    group1(caps).map(|s| s.trim().to_string())
}

pub fn extract_education(text: &str) -> Vec<Education> {
    let degree_rules = [
        Matcher::new(&DEGREE_IN_RE, degree_and_field),
        Matcher::new(&DEGREE_OF_RE, degree_and_field),
    ];
    let school_rules = [
        Matcher::new(&SCHOOL_AFTER_RE, trimmed_group1),
        Matcher::new(&SCHOOL_RE, trimmed_group1),
    ];

    text.split('\n')
        .filter(|line| CANDIDATE_RE.is_match(line))
        .map(|line| {
            let (degree, field) = first_match(line, &degree_rules)
                .map(|(degree, field)| (degree.to_string(), field))
                .unwrap_or_else(|| (DEFAULT_DEGREE.to_string(), DEFAULT_FIELD.to_string()));

            Education {
                institution: first_match(line, &school_rules)
                    .unwrap_or_else(|| DEFAULT_INSTITUTION.to_string()),
                degree,
                field,
                duration: capture1(&YEAR_RANGE_RE, line)
                    .unwrap_or_else(|| DEFAULT_DURATION.to_string()),
                gpa: capture1(&GPA_RE, line),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bachelor_line_with_school_and_gpa() {
        let edu = extract_education(
            "Bachelor of Science in Computer Science from Tech University, GPA 3.9",
        );
        assert_eq!(edu.len(), 1);
        assert_eq!(edu[0].degree, BACHELORS);
        assert_eq!(edu[0].field, "Computer Science");
        assert!(edu[0].institution.contains("Tech University"));
        assert_eq!(edu[0].gpa.as_deref(), Some("3.9"));
        assert_eq!(edu[0].duration, DEFAULT_DURATION);
    }

    #[test]
    fn test_master_keyword_is_case_insensitive() {
        let edu = extract_education("Master of Science in Data Science, Stanford University");
        assert_eq!(edu[0].degree, MASTERS);
        assert_eq!(edu[0].field, "Data Science");
        assert_eq!(edu[0].institution, "Stanford University");
    }

    #[test]
    fn test_ms_abbreviation() {
        let edu = extract_education("MS in Robotics at Carnegie Institute 2016 - 2018");
        assert_eq!(edu[0].degree, MASTERS);
        assert_eq!(edu[0].field, "Robotics");
        assert_eq!(edu[0].institution, "Carnegie Institute");
        assert_eq!(edu[0].duration, "2016 - 2018");
    }

    #[test]
    fn test_of_phrase_when_no_in_phrase() {
        let edu = extract_education("Bachelor of Arts, 2010 to 2014");
        assert_eq!(edu[0].degree, BACHELORS);
        assert_eq!(edu[0].field, "Arts");
        assert_eq!(edu[0].duration, "2010 to 2014");
    }

    #[test]
    fn test_phd_normalizes_to_bachelors() {
        let edu = extract_education("PhD in Physics");
        assert_eq!(edu[0].degree, BACHELORS);
        assert_eq!(edu[0].field, "Physics");
    }

    #[test]
    fn test_unmatched_degree_uses_literal_defaults() {
        let edu = extract_education("Graduated from Springfield College");
        assert_eq!(edu[0].degree, DEFAULT_DEGREE);
        assert_eq!(edu[0].field, DEFAULT_FIELD);
        assert_eq!(edu[0].institution, "Springfield College");
        assert!(edu[0].gpa.is_none());
    }

    #[test]
    fn test_open_ended_range_is_not_an_education_duration() {
        let edu = extract_education("Bachelor in Design, 2021 - present");
        assert_eq!(edu[0].duration, DEFAULT_DURATION);
        assert_eq!(edu[0].institution, DEFAULT_INSTITUTION);
    }

    #[test]
    fn test_one_record_per_candidate_line() {
        let text = "BS in Math\nnothing here\nMaster of Fine Arts";
        let edu = extract_education(text);
        assert_eq!(edu.len(), 2);
        assert_eq!(edu[1].degree, MASTERS);
        assert_eq!(edu[1].field, "Fine Arts");
    }

    #[test]
    fn test_comma_between_keyword_and_field() {
        let edu = extract_education("Bachelors degree, major in Economics");
        assert_eq!(edu[0].degree, BACHELORS);
        assert_eq!(edu[0].field, "Economics");
    }

    #[test]
    fn test_keyword_inside_a_word() {
        // "BA" in "MBA", "ma" in "Diploma"
        let mba = extract_education("MBA in Finance");
        assert_eq!(mba[0].degree, BACHELORS);
        assert_eq!(mba[0].field, "Finance");

        let diploma = extract_education("Diploma in Graphic Design");
        assert_eq!(diploma[0].degree, MASTERS);
        assert_eq!(diploma[0].field, "Graphic Design");
    }

    #[test]
    fn test_no_candidates() {
        assert!(extract_education("Went hiking.").is_empty());
        assert!(extract_education("").is_empty());
    }
}
