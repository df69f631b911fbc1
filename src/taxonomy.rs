//! Category chip list for the projects view.
//!
//! A page can pin its chip list in `projects-page.json`; otherwise the chips
//! are `All` plus every category found in the data. A pinned list can drift
//! from the data, leaving projects reachable only through `All`. Those gaps
//! are reported, never patched over.

use crate::catalog::identity::{Category, CategoryFilter};
use crate::catalog::model::ProjectRecord;
use crate::facets::distinct_categories;
use serde::Serialize;
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TaxonomySource {
    Configured,
    Derived,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Taxonomy {
    pub source: TaxonomySource,
    pub chips: Vec<CategoryFilter>,
    gaps: Vec<Category>,
}

impl Taxonomy {
    /// Data categories with no chip of their own.
    pub fn gaps(&self) -> &[Category] {
        &self.gaps
    }

    /// Chips that match no record in the data.
    pub fn empty_chips<'a>(&'a self, records: &'a [ProjectRecord]) -> Vec<&'a CategoryFilter> {
        self.chips
            .iter()
            .filter(|chip| match chip {
                CategoryFilter::All => false,
                CategoryFilter::Only(category) => {
                    !records.iter().any(|record| &record.category == category)
                }
            })
            .collect()
    }
}

/// Resolve the chip list from an optional configured list and the data.
pub fn resolve_categories(configured: &[String], records: &[ProjectRecord]) -> Taxonomy {
    let data_categories = distinct_categories(records);

    if configured.is_empty() {
        let mut chips = vec![CategoryFilter::All];
        chips.extend(data_categories.into_iter().map(CategoryFilter::Only));
        return Taxonomy {
            source: TaxonomySource::Derived,
            chips,
            gaps: Vec::new(),
        };
    }

    let chips: Vec<CategoryFilter> = configured
        .iter()
        .map(|label| CategoryFilter::from_label(label))
        .collect();
    let gaps: Vec<Category> = data_categories
        .into_iter()
        .filter(|category| !chips.contains(&CategoryFilter::Only(category.clone())))
        .collect();
    for category in &gaps {
        warn!(
            category = category.as_str(),
            "category has projects but no configured filter chip"
        );
    }

    Taxonomy {
        source: TaxonomySource::Configured,
        chips,
        gaps,
    }
}
