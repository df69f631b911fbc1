//! Indexed view of the project content store.
//!
//! The index validates `projects.json` against the bundled JSON Schema, then
//! enforces the invariants the schema cannot express (unique ids, non-blank
//! categories and technologies). Load order is preserved: it is the order
//! ties fall back to when sorting and the order featured projects come from.

use crate::catalog::identity::ProjectId;
use crate::catalog::model::ProjectRecord;
use crate::facets::{CatalogStats, FacetCounts, facet_counts};
use crate::query::{QuerySpec, filter_and_sort};
use crate::schema_loader::{
    SchemaLoadOptions, SchemaLoadResult, compile_schema, load_json_schema, validate_instance,
};
use anyhow::{Context, Result, bail};
use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

const PROJECTS_SCHEMA_VERSION: &str = "portfolio_projects_v1";
const PROJECTS_SCHEMA_FILE: &str = "schema/projects.schema.json";
const EMBEDDED_PROJECTS_SCHEMA: &str = include_str!("../../schema/projects.schema.json");

#[derive(Debug, Clone)]
/// Project records in load order plus an id index for detail lookups.
pub struct ProjectIndex {
    records: Vec<ProjectRecord>,
    by_id: BTreeMap<ProjectId, usize>,
}

impl ProjectIndex {
    /// Load and validate `projects.json` from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let file =
            File::open(path).with_context(|| format!("opening projects {}", path.display()))?;
        let value: Value = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("parsing projects {}", path.display()))?;

        let schema = validate_against_schema(path, &value)?;
        let records: Vec<ProjectRecord> = serde_json::from_value(value)
            .with_context(|| format!("loading {}", path.display()))?;
        let index = Self::from_records(records)?;
        debug!(
            path = %path.display(),
            projects = index.len(),
            schema_version = %schema.schema_version,
            "loaded project catalog"
        );
        Ok(index)
    }

    /// Build an index from already-parsed records.
    ///
    /// Rejects duplicate ids and blank categories/technologies. Unparseable
    /// dates are kept; they only affect ordering.
    pub fn from_records(records: Vec<ProjectRecord>) -> Result<Self> {
        let by_id = build_index(&records)?;
        Ok(Self { records, by_id })
    }

    /// Resolve a project by id.
    pub fn project(&self, id: ProjectId) -> Option<&ProjectRecord> {
        self.by_id.get(&id).map(|&pos| &self.records[pos])
    }

    /// Records in load order.
    pub fn records(&self) -> &[ProjectRecord] {
        &self.records
    }

    /// Iterates project ids in ascending order.
    pub fn ids(&self) -> impl Iterator<Item = &ProjectId> {
        self.by_id.keys()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Run a catalog query over the loaded records.
    pub fn query(&self, query: &QuerySpec) -> Vec<&ProjectRecord> {
        filter_and_sort(&self.records, query)
    }

    /// Category chip counts under the query's text search.
    pub fn facets(&self, query: &QuerySpec) -> FacetCounts {
        facet_counts(&self.records, &query.search)
    }

    pub fn stats(&self) -> CatalogStats {
        CatalogStats::compute(&self.records)
    }
}

fn build_index(records: &[ProjectRecord]) -> Result<BTreeMap<ProjectId, usize>> {
    let mut map = BTreeMap::new();
    for (pos, record) in records.iter().enumerate() {
        if map.insert(record.id, pos).is_some() {
            bail!("duplicate project id {}", record.id);
        }
        if record.category.as_str().trim().is_empty() {
            bail!("project {} has an empty category", record.id);
        }
        if record.technologies.is_empty() {
            bail!("project {} lists no technologies", record.id);
        }
        if record.technologies.iter().any(|tech| tech.trim().is_empty()) {
            bail!("project {} has an empty technology entry", record.id);
        }
        if record.parsed_date().is_none() {
            warn!(
                id = record.id.0,
                date = %record.date,
                "project date is not parseable; it will sort as the earliest date"
            );
        }
    }
    Ok(map)
}

fn validate_against_schema(projects_path: &Path, value: &Value) -> Result<SchemaLoadResult> {
    let schema = projects_schema(projects_path)?;
    validate_instance(
        &schema,
        value,
        &format!("project list {}", projects_path.display()),
    )?;
    Ok(schema)
}

fn projects_schema(projects_path: &Path) -> Result<SchemaLoadResult> {
    let allowed = BTreeSet::from([PROJECTS_SCHEMA_VERSION.to_string()]);
    let options = SchemaLoadOptions {
        allowed_versions: Some(&allowed),
        ..Default::default()
    };
    match resolve_projects_schema_path(projects_path) {
        Some(schema_path) => load_json_schema(&schema_path, options),
        None => {
            let embedded: Value = serde_json::from_str(EMBEDDED_PROJECTS_SCHEMA)
                .context("parsing embedded projects schema")?;
            compile_schema(&embedded, options).context("compiling embedded projects schema")
        }
    }
}

/// Prefer a schema shipped next to the data directory (`<root>/schema/`).
fn resolve_projects_schema_path(projects_path: &Path) -> Option<PathBuf> {
    let base = projects_path.parent().and_then(|p| p.parent())?;
    let candidate = base.join(PROJECTS_SCHEMA_FILE);
    candidate.is_file().then_some(candidate)
}
