// src/services/profile.rs
//! Portfolio document the rule responder answers from.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::ConfigError;

const BUILTIN_PROFILE: &str = include_str!("../../data/profile.json");

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub location: Location,
    pub education: Education,
    pub interests: Vec<String>,
    pub languages: Vec<String>,
    pub soft_skills: Vec<String>,
    pub tools: Vec<String>,
    pub projects: Vec<Project>,
    pub contact: Contact,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    pub hometown: String,
    pub current: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Education {
    pub current: Degree,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Degree {
    pub degree: String,
    pub specialization: String,
    pub college: String,
    pub university: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    pub description: String,
    pub technologies: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contact {
    pub linkedin: String,
    pub github: String,
}

impl Profile {
    /// The profile compiled into the binary.
    pub fn builtin() -> Result<Self, ConfigError> {
        Self::from_json(BUILTIN_PROFILE)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::ProfileIo {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let profile: Profile =
            serde_json::from_str(raw).map_err(|e| ConfigError::Profile(e.to_string()))?;
        profile.validate()?;
        Ok(profile)
    }

    /// The responder lists these and quotes the first project, so none may be empty.
    fn validate(&self) -> Result<(), ConfigError> {
        let lists = [
            ("interests", self.interests.len()),
            ("languages", self.languages.len()),
            ("soft_skills", self.soft_skills.len()),
            ("tools", self.tools.len()),
            ("projects", self.projects.len()),
        ];
        if let Some((field, _)) = lists.iter().find(|(_, len)| *len == 0) {
            return Err(ConfigError::Profile(format!("`{field}` must not be empty")));
        }
        if self.projects[0].technologies.is_empty() {
            return Err(ConfigError::Profile(
                "`projects[0].technologies` must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    pub fn featured_project(&self) -> &Project {
        &self.projects[0]
    }
}
