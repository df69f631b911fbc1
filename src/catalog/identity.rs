use anyhow::{Context, Result, bail};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Label of the catch-all category chip.
pub const ALL_CATEGORIES: &str = "All";

/// Stable numeric identifier of a project record.
///
/// Used by detail routes (`/projects/<id>`), so it must stay unique across the
/// content store.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(pub u64);

impl FromStr for ProjectId {
    type Err = anyhow::Error;

    fn from_str(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            bail!("empty project id");
        }
        trimmed
            .parse::<u64>()
            .map(ProjectId)
            .with_context(|| format!("project id must be a non-negative integer, got '{raw}'"))
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Category label attached to every project.
///
/// The known variants are the categories the site ships content for; `Other`
/// keeps any additional label verbatim so new content never fails to load.
/// Equality is on the exact label, so `Other("cloud")` never matches `Cloud`.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Category {
    NetworkSecurity,
    SystemAdministration,
    Cybersecurity,
    Cloud,
    Networking,
    Other(String),
}

impl Category {
    pub fn as_str(&self) -> &str {
        match self {
            Category::NetworkSecurity => "Network Security",
            Category::SystemAdministration => "System Administration",
            Category::Cybersecurity => "Cybersecurity",
            Category::Cloud => "Cloud",
            Category::Networking => "Networking",
            Category::Other(value) => value.as_str(),
        }
    }

    /// Resolve a label into a category; unknown labels land in `Other`.
    pub fn from_label(value: &str) -> Self {
        match value {
            "Network Security" => Category::NetworkSecurity,
            "System Administration" => Category::SystemAdministration,
            "Cybersecurity" => Category::Cybersecurity,
            "Cloud" => Category::Cloud,
            "Networking" => Category::Networking,
            other => Category::Other(other.to_string()),
        }
    }

    /// True for the categories the site knows about.
    pub fn is_known(&self) -> bool {
        !matches!(self, Category::Other(_))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Category {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Ok(Self::from_label(&value))
    }
}

/// Active category selection: the `All` sentinel or a single category.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn from_label(value: &str) -> Self {
        if value == ALL_CATEGORIES {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(Category::from_label(value))
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_CATEGORIES,
            CategoryFilter::Only(category) => category.as_str(),
        }
    }

    /// Whether a record in `category` passes this filter.
    pub fn admits(&self, category: &Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(active) => active == category,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, CategoryFilter::All)
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        CategoryFilter::Only(category)
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for CategoryFilter {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for CategoryFilter {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Ok(Self::from_label(&value))
    }
}
