//! Typed mirrors of the secondary content files.
//!
//! `projects-page.json`, `skills.json` and `certifications.json` are plain
//! data; the only conversion done here is resolving icon names.

use crate::icons::IconName;
use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Copy and configuration for the projects listing page.
pub struct ProjectsPage {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Category chips to show; empty means derive them from the data.
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub filter_placeholder: String,
    #[serde(default)]
    pub no_projects_message: String,
    #[serde(default)]
    pub clear_filters_text: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SectionHeading {
    pub title: String,
    pub description: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub title: String,
    #[serde(default)]
    pub icon: IconName,
    pub skills: Vec<String>,
    #[serde(default)]
    pub color: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillsData {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub skill_categories: Vec<SkillCategory>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certifications: Option<SectionHeading>,
}

impl SkillsData {
    /// Every skill badge across categories, in content order.
    pub fn all_skills(&self) -> impl Iterator<Item = &str> {
        self.skill_categories
            .iter()
            .flat_map(|category| category.skills.iter().map(String::as_str))
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Certificate {
    pub name: String,
    #[serde(default)]
    pub image: String,
    pub year: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issuer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CertificationsData {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub items: Vec<Certificate>,
}

/// Read and parse one JSON content file.
pub fn load_json_file<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let data = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&data).with_context(|| format!("parsing {}", path.display()))
}

/// Like `load_json_file`, but a missing file yields `T::default()`.
pub fn load_optional_json_file<T: DeserializeOwned + Default>(path: &Path) -> Result<T> {
    if !path.exists() {
        return Ok(T::default());
    }
    load_json_file(path)
}
