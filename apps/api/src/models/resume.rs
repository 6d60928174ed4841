use serde::{Deserialize, Serialize};

/// Contact block and summary. Only the two links may be unset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    pub company: String,
    pub position: String,
    /// Free-form, e.g. "2021 - Present".
    pub duration: String,
    /// One "• "-prefixed line per achievement.
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Education {
    pub institution: String,
    pub degree: String,
    pub field: String,
    pub duration: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gpa: Option<String>,
}

/// The structured record produced from raw text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resume {
    pub personal_info: PersonalInfo,
    pub experiences: Vec<Experience>,
    pub education: Vec<Education>,
    pub skills: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Resume {
        Resume {
            personal_info: PersonalInfo {
                full_name: "Jane Doe".to_string(),
                email: "jane@x.com".to_string(),
                phone: "(555) 987-6543".to_string(),
                location: "San Francisco, CA".to_string(),
                linkedin: None,
                website: Some("janedoe.dev".to_string()),
                summary: "Engineer.".to_string(),
            },
            experiences: vec![],
            education: vec![Education {
                institution: "Tech University".to_string(),
                degree: "Bachelor's Degree".to_string(),
                field: "Computer Science".to_string(),
                duration: "2015 - 2019".to_string(),
                gpa: None,
            }],
            skills: vec!["Rust".to_string()],
        }
    }

    #[test]
    fn test_resume_serializes_with_camel_case_keys() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(value["personalInfo"]["fullName"], "Jane Doe");
        assert_eq!(value["personalInfo"]["website"], "janedoe.dev");
        assert!(value["personalInfo"].get("linkedin").is_none());
        assert!(value["education"][0].get("gpa").is_none());
    }

    #[test]
    fn test_resume_accepts_missing_optional_fields() {
        let json = r#"{
            "personalInfo": {
                "fullName": "Jane Doe",
                "email": "jane@x.com",
                "phone": "(555) 987-6543",
                "location": "San Francisco, CA",
                "summary": "Engineer."
            },
            "experiences": [],
            "education": [],
            "skills": []
        }"#;
        let resume: Resume = serde_json::from_str(json).unwrap();
        assert!(resume.personal_info.linkedin.is_none());
        assert!(resume.personal_info.website.is_none());
    }
}
