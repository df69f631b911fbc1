//! Catalog query engine.
//!
//! `filter_and_sort` is a pure function of `(records, query)`: it borrows the
//! base collection, never mutates it, and never fails. All view state
//! (category chip, search box, sort dropdown, featured mode) lives with the
//! caller and arrives fresh in a `QuerySpec` on every call.

use crate::catalog::identity::CategoryFilter;
use crate::catalog::model::ProjectRecord;
use anyhow::{Result, bail};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Number of projects shown by the featured showcase.
pub const FEATURED_LIMIT: usize = 3;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum SortOrder {
    /// Most recent first.
    #[default]
    #[serde(rename = "date-desc")]
    DateDesc,
    #[serde(rename = "date-asc")]
    DateAsc,
    /// Title collation, case-insensitive first.
    #[serde(rename = "name-asc", alias = "name")]
    NameAsc,
    /// Content file order, as authored.
    #[serde(rename = "content")]
    Content,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::DateDesc => "date-desc",
            SortOrder::DateAsc => "date-asc",
            SortOrder::NameAsc => "name-asc",
            SortOrder::Content => "content",
        }
    }
}

impl FromStr for SortOrder {
    type Err = anyhow::Error;

    fn from_str(raw: &str) -> Result<Self> {
        match raw {
            "date-desc" => Ok(SortOrder::DateDesc),
            "date-asc" => Ok(SortOrder::DateAsc),
            "name-asc" | "name" => Ok(SortOrder::NameAsc),
            "content" => Ok(SortOrder::Content),
            other => bail!(
                "unknown sort order '{other}' (expected date-desc|date-asc|name-asc|content)"
            ),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How many results a view shows.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultLimit {
    #[default]
    Unrestricted,
    /// The home page showcase: the first `FEATURED_LIMIT` results.
    Featured,
}

impl ResultLimit {
    pub fn max_results(&self) -> Option<usize> {
        match self {
            ResultLimit::Unrestricted => None,
            ResultLimit::Featured => Some(FEATURED_LIMIT),
        }
    }
}

/// Everything one catalog view needs to compute its result list.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuerySpec {
    #[serde(rename = "activeCategory", default)]
    pub category: CategoryFilter,
    #[serde(rename = "searchQuery", default)]
    pub search: String,
    #[serde(rename = "sortOrder", default)]
    pub sort: SortOrder,
    #[serde(default)]
    pub limit: ResultLimit,
}

impl QuerySpec {
    pub fn new() -> Self {
        Self::default()
    }

    /// The home page showcase query: the first projects of the content file.
    pub fn featured() -> Self {
        Self::default()
            .with_sort(SortOrder::Content)
            .with_limit(ResultLimit::Featured)
    }

    pub fn with_category(mut self, category: impl Into<CategoryFilter>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_sort(mut self, sort: SortOrder) -> Self {
        self.sort = sort;
        self
    }

    pub fn with_limit(mut self, limit: ResultLimit) -> Self {
        self.limit = limit;
        self
    }

    /// True when a category or text filter narrows the result set.
    pub fn has_active_filters(&self) -> bool {
        !self.category.is_all() || normalized_search(&self.search).is_some()
    }

    /// Reset category and search, keep the view's sort and limit.
    pub fn cleared(&self) -> Self {
        Self {
            category: CategoryFilter::All,
            search: String::new(),
            sort: self.sort,
            limit: self.limit,
        }
    }
}

/// Filter and order `records` for one view.
///
/// Category filter first, then text search, then a stable sort, then the
/// result limit. The returned references keep the input order for equal sort
/// keys.
pub fn filter_and_sort<'a>(records: &'a [ProjectRecord], query: &QuerySpec) -> Vec<&'a ProjectRecord> {
    let needle = normalized_search(&query.search);
    let mut keyed: Vec<(SortKey, &ProjectRecord)> = records
        .iter()
        .filter(|record| query.category.admits(&record.category))
        .filter(|record| needle.as_deref().is_none_or(|n| matches_search(record, n)))
        .map(|record| (SortKey::for_record(record, query.sort), record))
        .collect();

    // sort_by is stable, so equal keys keep their load order.
    keyed.sort_by(|(a, _), (b, _)| a.compare(b, query.sort));

    let mut results: Vec<&ProjectRecord> = keyed.into_iter().map(|(_, record)| record).collect();
    if let Some(max) = query.limit.max_results() {
        results.truncate(max);
    }
    results
}

/// Lower-cased trimmed search text, or `None` when the search is blank.
pub fn normalized_search(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_lowercase())
}

/// Whether `record` contains the already-normalized `needle`.
pub fn matches_search(record: &ProjectRecord, needle: &str) -> bool {
    record.title.to_lowercase().contains(needle)
        || record.description.to_lowercase().contains(needle)
        || record.long_description.to_lowercase().contains(needle)
        || record
            .technologies
            .iter()
            .any(|tech| tech.to_lowercase().contains(needle))
}

/// Precomputed sort key so dates are parsed once per record.
enum SortKey {
    Date(Option<NaiveDateTime>),
    Title(TitleKey),
    Unordered,
}

impl SortKey {
    fn for_record(record: &ProjectRecord, order: SortOrder) -> Self {
        match order {
            SortOrder::DateDesc | SortOrder::DateAsc => SortKey::Date(record.parsed_date()),
            SortOrder::NameAsc => SortKey::Title(TitleKey::new(&record.title)),
            SortOrder::Content => SortKey::Unordered,
        }
    }

    fn compare(&self, other: &Self, order: SortOrder) -> Ordering {
        match (self, other) {
            // `None < Some`, so unparseable dates act as the earliest date.
            (SortKey::Date(a), SortKey::Date(b)) => match order {
                SortOrder::DateDesc => b.cmp(a),
                _ => a.cmp(b),
            },
            (SortKey::Title(a), SortKey::Title(b)) => a.compare(b),
            _ => Ordering::Equal,
        }
    }
}

/// Collation levels for a title: base letters, then accents, then case.
struct TitleKey {
    base: String,
    accented: String,
    title: String,
}

impl TitleKey {
    fn new(title: &str) -> Self {
        let decomposed: String = title.nfd().collect::<String>().to_lowercase();
        let base = decomposed.chars().filter(|c| !is_combining_mark(*c)).collect();
        Self {
            base,
            accented: decomposed,
            title: title.nfc().collect(),
        }
    }

    fn compare(&self, other: &Self) -> Ordering {
        self.base
            .cmp(&other.base)
            .then_with(|| self.accented.cmp(&other.accented))
            .then_with(|| compare_case(&self.title, &other.title))
    }
}

/// Tertiary collation step: at the first differing character lower case
/// sorts before upper case.
fn compare_case(a: &str, b: &str) -> Ordering {
    for (ca, cb) in a.chars().zip(b.chars()) {
        if ca == cb {
            continue;
        }
        return match (ca.is_lowercase(), cb.is_lowercase()) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            _ => ca.cmp(&cb),
        };
    }
    a.chars().count().cmp(&b.chars().count())
}
