//! Skills extraction: a known-keyword scan plus an explicit "Skills:" line.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::extraction::cascade::capture1;

/// Canonical spellings, scanned in this order.
pub const KNOWN_SKILLS: &[&str] = &[
    "JavaScript",
    "Python",
    "Java",
    "React",
    "Node.js",
    "Angular",
    "Vue.js",
    "HTML",
    "CSS",
    "TypeScript",
    "PHP",
    "Ruby",
    "Go",
    "Rust",
    "Swift",
    "C++",
    "C#",
    "AWS",
    "Azure",
    "GCP",
    "Docker",
    "Kubernetes",
    "Jenkins",
    "CI/CD",
    "MySQL",
    "PostgreSQL",
    "MongoDB",
    "Redis",
    "SQL",
    "Git",
    "Agile",
    "Scrum",
    "REST",
    "GraphQL",
    "API",
    "Machine Learning",
    "Data Science",
    "AI",
    "DevOps",
    "Project Management",
    "Leadership",
    "Communication",
];

static SKILLS_SECTION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)skills:?\s*([^\n]+)").unwrap());

/// Keyword hits first, then the section's items; duplicates keep their first position.
pub fn extract_skills(text: &str) -> Vec<String> {
    let text_lower = text.to_lowercase();

    let keyword_hits = KNOWN_SKILLS
        .iter()
        .filter(|skill| text_lower.contains(&skill.to_lowercase()))
        .map(|skill| skill.to_string());

    let section_hits = capture1(&SKILLS_SECTION_RE, text)
        .map(|rest| split_skill_list(&rest))
        .unwrap_or_default();

    let mut seen = HashSet::new();
    keyword_hits
        .chain(section_hits)
        .filter(|skill| seen.insert(skill.clone()))
        .collect()
}

fn split_skill_list(list: &str) -> Vec<String> {
    list.split([',', ';'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}
