//! The canonical portfolio data shape every component reads and writes.
//!
//! Two rules hold everywhere:
//! 1. After [`PortfolioSchema::normalized`] runs, every list field has at
//!    least one element and `name`/`title`/`bio` are non-empty — downstream
//!    renderers assume this and never re-check.
//! 2. Mutations are full replacements. There is no partial-patch path, so the
//!    UI can treat the schema as a value type.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

pub const DEFAULT_NAME: &str = "Your Name";
pub const DEFAULT_TITLE: &str = "Professional Title";
pub const DEFAULT_BIO: &str = "Professional with experience in creating innovative solutions.";
pub const DEFAULT_SKILL: &str = "Add your skills";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PortfolioSchema {
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub bio: String,
    #[serde(default, deserialize_with = "lenient_vec")]
    pub skills: Vec<String>,
    #[serde(default, deserialize_with = "lenient_vec")]
    pub experience: Vec<Experience>,
    #[serde(default, deserialize_with = "lenient_vec")]
    pub projects: Vec<Project>,
    #[serde(default, deserialize_with = "lenient_vec")]
    pub education: Vec<Education>,
    #[serde(default)]
    pub contact: Contact,
    #[serde(default, rename = "customSections", deserialize_with = "lenient_vec")]
    pub custom_sections: Vec<CustomSection>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Experience {
    #[serde(default, deserialize_with = "lenient_string")]
    pub role: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub company: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub duration: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Project {
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub description: String,
    #[serde(default, deserialize_with = "lenient_vec")]
    pub technologies: Vec<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub link: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Education {
    #[serde(default, deserialize_with = "lenient_string")]
    pub degree: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub institution: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub year: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Contact {
    #[serde(default, deserialize_with = "lenient_string")]
    pub email: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub phone: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub linkedin: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub github: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CustomSection {
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub content: String,
}

impl PortfolioSchema {
    /// The defaulting/validation pass. Every extraction path (chat transcript,
    /// PDF pipeline) and every user edit funnels through this before the
    /// schema is handed to anything else.
    ///
    /// Idempotent: running it twice yields an identical schema.
    pub fn normalized(mut self) -> Self {
        if self.name.trim().is_empty() {
            self.name = DEFAULT_NAME.to_string();
        }
        if self.title.trim().is_empty() {
            self.title = DEFAULT_TITLE.to_string();
        }
        if self.bio.trim().is_empty() {
            self.bio = DEFAULT_BIO.to_string();
        }

        self.skills = self
            .skills
            .into_iter()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        if self.skills.is_empty() {
            self.skills = vec![DEFAULT_SKILL.to_string()];
        }

        if self.experience.is_empty() {
            self.experience = vec![Experience {
                role: "Your Role".to_string(),
                company: "Company Name".to_string(),
                duration: "Date Range".to_string(),
                description: "Add your experience description".to_string(),
            }];
        }

        if self.projects.is_empty() {
            self.projects = vec![Project {
                name: "Your Project".to_string(),
                description: "Add project description".to_string(),
                technologies: vec![],
                link: String::new(),
            }];
        }
        for project in &mut self.projects {
            if project.technologies.is_empty() {
                project.technologies = self.skills.iter().take(3).cloned().collect();
            }
        }

        if self.education.is_empty() {
            self.education = vec![Education {
                degree: "Your Degree".to_string(),
                institution: "Institution Name".to_string(),
                year: "Year".to_string(),
            }];
        }

        self
    }
}

/// Accepts a missing, null, or wrongly-typed string as `""` instead of
/// failing the whole parse. Model output is not trusted to be well-typed.
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        _ => String::new(),
    })
}

/// Coerces a non-array value to an empty list and drops malformed items,
/// rather than rejecting the entire response.
fn lenient_vec<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect(),
        _ => Vec::new(),
    })
}
