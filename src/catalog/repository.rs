//! Content store: every JSON file of a site data directory, loaded once.
//!
//! `projects.json` is required and goes through `ProjectIndex::load`; the page,
//! skills and certifications files are optional and default when absent.

use crate::catalog::index::ProjectIndex;
use crate::content::{
    CertificationsData, ProjectsPage, SkillsData, load_optional_json_file,
};
use crate::taxonomy::{Taxonomy, resolve_categories};
use anyhow::{Result, bail};
use std::path::{Path, PathBuf};

pub const PROJECTS_FILE: &str = "projects.json";
pub const PROJECTS_PAGE_FILE: &str = "projects-page.json";
pub const SKILLS_FILE: &str = "skills.json";
pub const CERTIFICATIONS_FILE: &str = "certifications.json";

#[derive(Debug, Clone)]
/// Read-only snapshot of a data directory.
pub struct ContentStore {
    root: PathBuf,
    projects: ProjectIndex,
    projects_page: ProjectsPage,
    skills: SkillsData,
    certifications: CertificationsData,
}

impl ContentStore {
    /// Load every content file under `dir`.
    pub fn load_dir(dir: &Path) -> Result<Self> {
        if !dir.is_dir() {
            bail!("content directory not found: {}", dir.display());
        }
        let projects = ProjectIndex::load(&dir.join(PROJECTS_FILE))?;
        let projects_page = load_optional_json_file(&dir.join(PROJECTS_PAGE_FILE))?;
        let skills = load_optional_json_file(&dir.join(SKILLS_FILE))?;
        let certifications = load_optional_json_file(&dir.join(CERTIFICATIONS_FILE))?;
        Ok(Self {
            root: dir.to_path_buf(),
            projects,
            projects_page,
            skills,
            certifications,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn projects(&self) -> &ProjectIndex {
        &self.projects
    }

    pub fn projects_page(&self) -> &ProjectsPage {
        &self.projects_page
    }

    pub fn skills(&self) -> &SkillsData {
        &self.skills
    }

    pub fn certifications(&self) -> &CertificationsData {
        &self.certifications
    }

    /// Category chips for the projects page, with gaps against the data.
    pub fn taxonomy(&self) -> Taxonomy {
        resolve_categories(&self.projects_page.categories, self.projects.records())
    }
}
