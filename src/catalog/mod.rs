//! Project catalog wiring.
//!
//! This module wraps the JSON content under `data/` so helpers can load a
//! validated snapshot with consistent identifiers. `ProjectIndex` covers
//! `projects.json`; `ContentStore` loads the whole data directory.

pub mod identity;
pub mod index;
pub mod model;
pub mod repository;

pub use identity::{ALL_CATEGORIES, Category, CategoryFilter, ProjectId};
pub use index::ProjectIndex;
pub use model::{ProjectRecord, parse_project_date};
pub use repository::ContentStore;
