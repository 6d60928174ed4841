//! Professional summary selection — keyword-driven, no generation.

pub const ENGINEER_SUMMARY: &str = "Experienced software engineer with expertise in developing scalable applications and systems. Proven ability to lead technical projects, optimize performance, and collaborate effectively with cross-functional teams to deliver innovative solutions.";

pub const MANAGER_SUMMARY: &str = "Results-driven manager with strong leadership skills and experience in driving team performance and project success. Expertise in strategic planning, process optimization, and fostering collaborative work environments.";

pub const DESIGNER_SUMMARY: &str = "Creative designer with a passion for user-centered design and visual storytelling. Experienced in creating compelling designs that enhance user experience and drive business objectives through innovative design solutions.";

pub const GENERIC_SUMMARY: &str = "Experienced professional with a proven track record of delivering high-quality results and driving innovation. Skilled in multiple technologies and methodologies with strong leadership and problem-solving abilities. Passionate about creating efficient solutions and contributing to team success.";

/// Role keywords in priority order, each paired with its template.
const ROLE_TEMPLATES: &[(&str, &str)] = &[
    ("engineer", ENGINEER_SUMMARY),
    ("manager", MANAGER_SUMMARY),
    ("designer", DESIGNER_SUMMARY),
];

pub fn classify_summary(text: &str) -> &'static str {
    let text_lower = text.to_lowercase();
    ROLE_TEMPLATES
        .iter()
        .find(|(keyword, _)| text_lower.contains(keyword))
        .map(|&(_, template)| template)
        .unwrap_or(GENERIC_SUMMARY)
}
