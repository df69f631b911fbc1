//! Facet counts and summary statistics over the project collection.
//!
//! Category counts follow the active text search but ignore the active
//! category, so every chip shows what clicking it would yield right now.

use crate::catalog::identity::{Category, CategoryFilter};
use crate::catalog::model::ProjectRecord;
use crate::query::{matches_search, normalized_search};
use serde::Serialize;
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryFacet {
    pub category: Category,
    pub count: usize,
}

/// Per-category record counts plus the implicit `All` facet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FacetCounts {
    pub all: usize,
    /// Every category of the base collection in first-appearance order,
    /// including those whose count dropped to zero under the search.
    pub categories: Vec<CategoryFacet>,
}

impl FacetCounts {
    /// Badge count for a chip; unknown categories count zero.
    pub fn count(&self, filter: &CategoryFilter) -> usize {
        match filter {
            CategoryFilter::All => self.all,
            CategoryFilter::Only(category) => self
                .categories
                .iter()
                .find(|facet| &facet.category == category)
                .map(|facet| facet.count)
                .unwrap_or(0),
        }
    }
}

/// Count records per category among those matching `search`.
///
/// A blank search counts the whole collection, so `all == records.len()`.
pub fn facet_counts(records: &[ProjectRecord], search: &str) -> FacetCounts {
    let needle = normalized_search(search);
    let mut counts = FacetCounts::default();
    for record in records {
        let matched = needle.as_deref().is_none_or(|n| matches_search(record, n));
        let slot = match counts
            .categories
            .iter()
            .position(|facet| facet.category == record.category)
        {
            Some(pos) => pos,
            None => {
                counts.categories.push(CategoryFacet {
                    category: record.category.clone(),
                    count: 0,
                });
                counts.categories.len() - 1
            }
        };
        if matched {
            counts.categories[slot].count += 1;
            counts.all += 1;
        }
    }
    counts
}

/// Distinct categories in first-appearance order.
pub fn distinct_categories(records: &[ProjectRecord]) -> Vec<Category> {
    let mut seen: Vec<Category> = Vec::new();
    for record in records {
        if !seen.contains(&record.category) {
            seen.push(record.category.clone());
        }
    }
    seen
}

pub fn distinct_category_count(records: &[ProjectRecord]) -> usize {
    distinct_categories(records).len()
}

/// Number of distinct technology labels (exact string match).
pub fn distinct_technology_count(records: &[ProjectRecord]) -> usize {
    records
        .iter()
        .flat_map(|record| record.technologies.iter().map(String::as_str))
        .collect::<HashSet<&str>>()
        .len()
}

/// Number of distinct calendar years; unparseable dates contribute nothing.
pub fn distinct_active_years(records: &[ProjectRecord]) -> usize {
    records
        .iter()
        .filter_map(ProjectRecord::year)
        .collect::<HashSet<i32>>()
        .len()
}

/// Summary figures shown under the project list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogStats {
    pub total_projects: usize,
    pub categories: usize,
    pub technologies: usize,
    pub years_active: usize,
}

impl CatalogStats {
    pub fn compute(records: &[ProjectRecord]) -> Self {
        Self {
            total_projects: records.len(),
            categories: distinct_category_count(records),
            technologies: distinct_technology_count(records),
            years_active: distinct_active_years(records),
        }
    }
}
