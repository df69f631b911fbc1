//! Project catalog query engine for the portfolio site.
//!
//! The crate loads the site's static JSON content (projects, page copy,
//! skills, certifications) into immutable snapshots and answers catalog
//! queries over them: category filter, free-text search, sort order, facet
//! counts and summary statistics. Helper binaries under `src/bin/` expose the
//! same queries as JSON on stdout.

use anyhow::{Result, bail};
use std::{
    env, fs,
    path::{Path, PathBuf},
};

pub mod catalog;
pub mod cli_support;
pub mod content;
pub mod facets;
pub mod icons;
pub mod query;
pub mod taxonomy;

mod schema_loader;

pub use catalog::{
    ALL_CATEGORIES, Category, CategoryFilter, ContentStore, ProjectId, ProjectIndex,
    ProjectRecord, parse_project_date,
};
pub use facets::{
    CatalogStats, CategoryFacet, FacetCounts, distinct_active_years, distinct_category_count,
    distinct_technology_count, facet_counts,
};
pub use icons::IconName;
pub use query::{FEATURED_LIMIT, QuerySpec, ResultLimit, SortOrder, filter_and_sort};
pub use taxonomy::{Taxonomy, TaxonomySource, resolve_categories};

const ROOT_SENTINEL: &str = "data/projects.json";
const DATA_DIR: &str = "data";
const ROOT_ENV: &str = "PORTFOLIO_ROOT";

/// Returns true when `candidate` holds a site data directory.
fn is_repo_root(candidate: &Path) -> bool {
    candidate.join(ROOT_SENTINEL).is_file()
}

/// Verifies that an explicit root hint points at a valid site checkout.
fn repo_root_from_hint(hint: &str) -> Option<PathBuf> {
    if hint.is_empty() {
        return None;
    }
    let hint_path = PathBuf::from(hint);
    if !hint_path.exists() || !is_repo_root(&hint_path) {
        return None;
    }
    fs::canonicalize(hint_path).ok()
}

fn search_upwards(start: &Path) -> Option<PathBuf> {
    let mut dir = fs::canonicalize(start).ok()?;
    loop {
        if is_repo_root(&dir) {
            return Some(dir);
        }
        if !dir.pop() {
            break;
        }
    }
    None
}

/// Locate the site root (the directory containing `data/projects.json`).
///
/// Search order: `PORTFOLIO_ROOT` when it points at a real root, then upwards
/// from the current directory, then upwards from the executable, then the
/// build-time hint.
pub fn find_repo_root() -> Result<PathBuf> {
    if let Ok(env_root) = env::var(ROOT_ENV) {
        if let Some(root) = repo_root_from_hint(&env_root) {
            return Ok(root);
        }
    }

    if let Ok(cwd) = env::current_dir() {
        if let Some(root) = search_upwards(&cwd) {
            return Ok(root);
        }
    }

    if let Ok(exe_path) = env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            if let Some(root) = search_upwards(exe_dir) {
                return Ok(root);
            }
        }
    }

    if let Some(hint) = option_env!("PORTFOLIO_ROOT_HINT") {
        if let Some(root) = repo_root_from_hint(hint) {
            return Ok(root);
        }
    }

    bail!(
        "Unable to locate the site data directory. Set {ROOT_ENV} to a directory containing {ROOT_SENTINEL} or pass --data."
    );
}

/// The content directory under a site root.
pub fn data_dir(repo_root: &Path) -> PathBuf {
    repo_root.join(DATA_DIR)
}

/// Resolve the data directory: an explicit override wins over discovery.
pub fn resolve_data_dir(explicit: Option<&Path>) -> Result<PathBuf> {
    match explicit {
        Some(dir) => {
            if !dir.is_dir() {
                bail!("data directory not found: {}", dir.display());
            }
            Ok(dir.to_path_buf())
        }
        None => Ok(data_dir(&find_repo_root()?)),
    }
}
