//! Plain-text export of a resume with fixed section headings.

use crate::models::resume::{Education, Experience, Resume};

const SKILL_SEPARATOR: &str = " • ";

/// Flattens a resume into a plain-text document.
///
/// Optional contact links and GPA lines are omitted when unset.
pub fn render_plain_text(resume: &Resume) -> String {
    let info = &resume.personal_info;
    let mut out = String::new();

    out.push_str(&info.full_name);
    out.push('\n');
    out.push_str(&format!("{} | {}\n", info.email, info.phone));
    out.push_str(&info.location);
    out.push('\n');
    if let Some(linkedin) = &info.linkedin {
        out.push_str(&format!("LinkedIn: {linkedin}\n"));
    }
    if let Some(website) = &info.website {
        out.push_str(&format!("Website: {website}\n"));
    }

    out.push_str("\nPROFESSIONAL SUMMARY\n");
    out.push_str(&info.summary);
    out.push('\n');

    out.push_str("\nPROFESSIONAL EXPERIENCE\n");
    for exp in &resume.experiences {
        out.push('\n');
        out.push_str(&render_experience(exp));
    }

    out.push_str("\nEDUCATION\n");
    for edu in &resume.education {
        out.push('\n');
        out.push_str(&render_education(edu));
    }

    out.push_str("\nSKILLS\n");
    out.push_str(&resume.skills.join(SKILL_SEPARATOR));
    out.push('\n');

    out
}

fn render_experience(exp: &Experience) -> String {
    format!(
        "{} | {}\n{}\n{}\n",
        exp.position, exp.company, exp.duration, exp.description
    )
}

fn render_education(edu: &Education) -> String {
    let mut block = format!(
        "{} in {}\n{} | {}\n",
        edu.degree, edu.field, edu.institution, edu.duration
    );
    if let Some(gpa) = &edu.gpa {
        block.push_str(&format!("GPA: {gpa}\n"));
    }
    block
}

/// Download name for an export, e.g. `Jane_Doe_Resume.txt`.
///
/// Only printable ASCII survives, minus quotes and backslashes, so the name is
/// always a valid quoted `Content-Disposition` filename.
pub fn export_filename(full_name: &str) -> String {
    let stem: String = full_name
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
        .chars()
        .filter(|c| c.is_ascii_graphic() && !matches!(*c, '"' | '\\'))
        .collect();

    if stem.is_empty() {
        "Resume.txt".to_string()
    } else {
        format!("{stem}_Resume.txt")
    }
}
