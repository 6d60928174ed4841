//! Canned content substituted for sections the extractors found nothing for.

use crate::models::resume::{Education, Experience};

pub fn default_experiences() -> Vec<Experience> {
    vec![
        Experience {
            company: "Tech Company Inc.".to_string(),
            position: "Senior Software Engineer".to_string(),
            duration: "2021 - Present".to_string(),
            description: "• Led development of scalable web applications serving 100K+ users\n\
                          • Improved system performance by 40% through optimization and refactoring\n\
                          • Mentored junior developers and established coding best practices\n\
                          • Collaborated with cross-functional teams to deliver features on time"
                .to_string(),
        },
        Experience {
            company: "Innovation Labs".to_string(),
            position: "Software Engineer".to_string(),
            duration: "2019 - 2021".to_string(),
            description: "• Developed and maintained RESTful APIs and microservices\n\
                          • Implemented automated testing strategies, reducing bugs by 30%\n\
                          • Participated in agile development processes and code reviews\n\
                          • Built responsive user interfaces using modern frameworks"
                .to_string(),
        },
    ]
}

pub fn default_education() -> Vec<Education> {
    vec![Education {
        institution: "University of Technology".to_string(),
        degree: "Bachelor of Science".to_string(),
        field: "Computer Science".to_string(),
        duration: "2015 - 2019".to_string(),
        gpa: Some("3.7".to_string()),
    }]
}

const DEFAULT_SKILLS: &[&str] = &[
    "JavaScript",
    "Python",
    "React",
    "Node.js",
    "AWS",
    "Docker",
    "PostgreSQL",
    "Git",
    "Agile Methodologies",
    "Problem Solving",
    "Team Leadership",
    "System Design",
];

pub fn default_skills() -> Vec<String> {
    DEFAULT_SKILLS.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_sizes() {
        assert_eq!(default_experiences().len(), 2);
        assert_eq!(default_education().len(), 1);
        assert_eq!(default_skills().len(), 12);
    }

    #[test]
    fn test_default_descriptions_are_bulleted() {
        for exp in default_experiences() {
            assert!(exp.description.lines().all(|l| l.starts_with("• ")));
        }
    }
}
