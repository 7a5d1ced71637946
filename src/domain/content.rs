//! Content store
//!
//! The portfolio page is driven by a single static JSON document. It is parsed
//! once at startup and shared read-only for the lifetime of the process.

use std::{
    fmt, fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;

use crate::domain::icon::{resolve, IconResolution};

/// Content compiled into the binary, used when no other source is configured.
pub const BUNDLED_CONTENT: &str = include_str!("../../.config/content.json");

/// Top-level fields that must be present for a page to render at all.
const REQUIRED_FIELDS: [&str; 2] = ["name", "contact"];

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct Profile {
    pub name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub about: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct Skill {
    pub name: String,
    #[serde(default)]
    pub icon: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct Project {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
}

/// Contact details, shown verbatim.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ContactInfo {
    #[serde(default)]
    pub email: String,
    #[serde(default, rename = "mobileNo", alias = "MobileNo")]
    pub mobile_number: String,
    #[serde(default, rename = "linkedin")]
    pub linkedin_url: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct Content {
    #[serde(flatten)]
    pub profile: Profile,
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub projects: Vec<Project>,
    pub contact: ContactInfo,
}

/// Where the content document comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContentSource {
    Bundled,
    File(PathBuf),
}

impl fmt::Display for ContentSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentSource::Bundled => write!(f, "<bundled>"),
            ContentSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

#[derive(Debug)]
pub enum ContentError {
    Io { path: PathBuf, source: std::io::Error },
    Json(serde_json::Error),
    NotAnObject,
    MissingField(&'static str),
}

impl fmt::Display for ContentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentError::Io { path, source } => {
                write!(f, "failed to read content file {}: {source}", path.display())
            }
            ContentError::Json(e) => write!(f, "malformed content document: {e}"),
            ContentError::NotAnObject => write!(f, "content document must be a JSON object"),
            ContentError::MissingField(field) => {
                write!(f, "content document is missing required field `{field}`")
            }
        }
    }
}

impl std::error::Error for ContentError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ContentError::Io { source, .. } => Some(source),
            ContentError::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ContentError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

/// Problems that do not stop the page from rendering but leave it looking wrong.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContentIssue {
    EmptyProfileField(&'static str),
    EmptySkillName { index: usize },
    EmptyProjectName { index: usize },
    UnknownIcon { skill: String, icon: String },
}

impl fmt::Display for ContentIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentIssue::EmptyProfileField(field) => write!(f, "`{field}` is empty"),
            ContentIssue::EmptySkillName { index } => write!(f, "skills[{index}] has no name"),
            ContentIssue::EmptyProjectName { index } => {
                write!(f, "projects[{index}] has no name")
            }
            ContentIssue::UnknownIcon { skill, icon } => {
                write!(f, "skill `{skill}` uses unknown icon `{icon}`")
            }
        }
    }
}

impl Content {
    pub fn from_json_str(s: &str) -> Result<Self, ContentError> {
        let value: serde_json::Value = serde_json::from_str(s)?;
        let object = value.as_object().ok_or(ContentError::NotAnObject)?;
        if let Some(missing) = REQUIRED_FIELDS
            .iter()
            .copied()
            .find(|field| !object.contains_key(*field))
        {
            return Err(ContentError::MissingField(missing));
        }

        Ok(serde_json::from_value(value)?)
    }

    pub fn from_path(path: &Path) -> Result<Self, ContentError> {
        let raw = fs::read_to_string(path).map_err(|source| ContentError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&raw)
    }

    pub fn bundled() -> Result<Self, ContentError> {
        Self::from_json_str(BUNDLED_CONTENT)
    }

    pub fn load(source: &ContentSource) -> Result<Self, ContentError> {
        let content = match source {
            ContentSource::Bundled => Self::bundled()?,
            ContentSource::File(path) => Self::from_path(path)?,
        };
        log::info!(
            "Loaded content from {source}: {} skill(s), {} project(s)",
            content.skills.len(),
            content.projects.len()
        );
        Ok(content)
    }

    pub fn validate(&self) -> Vec<ContentIssue> {
        let mut issues = Vec::new();

        for (field, value) in [
            ("name", &self.profile.name),
            ("title", &self.profile.title),
            ("about", &self.profile.about),
        ] {
            if value.trim().is_empty() {
                issues.push(ContentIssue::EmptyProfileField(field));
            }
        }

        for (index, skill) in self.skills.iter().enumerate() {
            if skill.name.trim().is_empty() {
                issues.push(ContentIssue::EmptySkillName { index });
            }
            if resolve(&skill.icon) == IconResolution::Missing {
                issues.push(ContentIssue::UnknownIcon {
                    skill: skill.name.clone(),
                    icon: skill.icon.clone(),
                });
            }
        }

        for (index, project) in self.projects.iter().enumerate() {
            if project.name.trim().is_empty() {
                issues.push(ContentIssue::EmptyProjectName { index });
            }
        }

        issues
    }
}
