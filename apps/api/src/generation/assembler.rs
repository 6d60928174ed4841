//! Resume assembly — runs every extractor over the raw text and fills empty
//! sections with canned defaults. Pure and deterministic.

use tracing::debug;

use crate::extraction::contact::{
    extract_email, extract_linkedin, extract_location, extract_name, extract_phone,
    extract_website,
};
use crate::extraction::education::extract_education;
use crate::extraction::experience::extract_experiences;
use crate::extraction::skills::extract_skills;
use crate::extraction::summary::classify_summary;
use crate::generation::defaults::{default_education, default_experiences, default_skills};
use crate::models::resume::{PersonalInfo, Resume};

/// `extracted` unless it is empty, else `default`.
pub fn pick<T>(section: &str, extracted: Vec<T>, default: impl FnOnce() -> Vec<T>) -> Vec<T> {
    if extracted.is_empty() {
        debug!("No {section} extracted, using defaults");
        default()
    } else {
        extracted
    }
}

pub fn assemble_resume(text: &str) -> Resume {
    let personal_info = PersonalInfo {
        full_name: extract_name(text),
        email: extract_email(text),
        phone: extract_phone(text),
        location: extract_location(text),
        linkedin: extract_linkedin(text),
        website: extract_website(text),
        summary: classify_summary(text).to_string(),
    };

    Resume {
        personal_info,
        experiences: pick("experiences", extract_experiences(text), default_experiences),
        education: pick("education", extract_education(text), default_education),
        skills: pick("skills", extract_skills(text), default_skills),
    }
}
