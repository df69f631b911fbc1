//! Deserializable representation of `data/projects.json`.
//!
//! Field names mirror the content file (camelCase). Records are immutable once
//! loaded; use `ProjectIndex` for validated loading and id lookup, and the
//! `query` module to filter and order them.

use crate::catalog::identity::{Category, ProjectId};
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// One project entry in the content store.
pub struct ProjectRecord {
    pub id: ProjectId,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub long_description: String,
    pub technologies: Vec<String>,
    pub category: Category,
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live_url: Option<String>,
}

impl ProjectRecord {
    /// UTC instant of the project date, or `None` when `date` is not parseable.
    pub fn parsed_date(&self) -> Option<NaiveDateTime> {
        parse_project_date(&self.date)
    }

    pub fn year(&self) -> Option<i32> {
        self.parsed_date().map(|stamp| stamp.year())
    }

    /// Repository link, treating an empty string as absent.
    pub fn github_link(&self) -> Option<&str> {
        non_empty(self.github.as_deref())
    }

    /// Live demo link, treating an empty string as absent.
    pub fn live_link(&self) -> Option<&str> {
        non_empty(self.live_url.as_deref())
    }

    pub fn image_ref(&self) -> Option<&str> {
        non_empty(self.image.as_deref())
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// Parse a content date into a UTC instant.
///
/// Accepts `YYYY-MM-DD` (midnight), RFC 3339 timestamps (converted to UTC),
/// local date-times `YYYY-MM-DDTHH:MM[:SS[.f]]` (read as UTC), `YYYY-MM`
/// (first of the month) and a bare `YYYY` (January 1st). Anything else yields
/// `None`.
pub fn parse_project_date(raw: &str) -> Option<NaiveDateTime> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Some(date.and_time(NaiveTime::MIN));
    }
    if let Ok(stamp) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(stamp.naive_utc());
    }
    for format in LOCAL_DATE_TIME_FORMATS {
        if let Ok(stamp) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(stamp);
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(&format!("{trimmed}-01"), "%Y-%m-%d") {
        return Some(date.and_time(NaiveTime::MIN));
    }
    if trimmed.len() == 4 && trimmed.bytes().all(|b| b.is_ascii_digit()) {
        let year = trimmed.parse::<i32>().ok()?;
        return NaiveDate::from_ymd_opt(year, 1, 1).map(|date| date.and_time(NaiveTime::MIN));
    }
    None
}

const LOCAL_DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
];
