use serde::{Deserialize, Serialize};

use crate::models::RoutineEntry;
use crate::routine::DayOrder;

/// Sentinel the filter dropdowns send for "no constraint".
const ALL: &str = "All";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoutineFilter {
    pub day: Option<String>,
    pub batch: Option<String>,
    pub section: Option<String>,
    pub time: Option<String>,
    /// Free-text search, case-insensitive, over course, room, section,
    /// faculty, batch, day and time. Accepted as `faculty` or `q`, but only
    /// one of the two per request; sending both is a duplicate field.
    #[serde(alias = "faculty", alias = "q")]
    pub query: Option<String>,
}

fn constraint(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty() && *v != ALL)
}

impl RoutineFilter {
    pub fn matches(&self, entry: &RoutineEntry) -> bool {
        let exact = [
            (&self.day, &entry.day),
            (&self.batch, &entry.batch),
            (&self.section, &entry.section),
            (&self.time, &entry.time_range),
        ];
        if exact
            .iter()
            .any(|(wanted, actual)| constraint(wanted).is_some_and(|w| w != actual.as_str()))
        {
            return false;
        }

        match constraint(&self.query) {
            Some(query) => {
                let query = query.to_lowercase();
                searchable_fields(entry).any(|field| field.to_lowercase().contains(&query))
            }
            None => true,
        }
    }

    pub fn apply(&self, entries: &[RoutineEntry]) -> Vec<RoutineEntry> {
        entries.iter().filter(|e| self.matches(e)).cloned().collect()
    }

    /// Query parameters understood by `GET /routines`. Unset values are omitted.
    pub fn backend_params(&self) -> Vec<(&'static str, String)> {
        [
            ("day", &self.day),
            ("faculty", &self.query),
            ("batch", &self.batch),
            ("time", &self.time),
        ]
        .into_iter()
        .filter_map(|(key, value)| constraint(value).map(|v| (key, v.to_string())))
        .collect()
    }
}

fn searchable_fields(entry: &RoutineEntry) -> impl Iterator<Item = &str> {
    [
        entry.course_code.as_str(),
        entry.course_title.as_str(),
        entry.room.as_str(),
        entry.section.as_str(),
        entry.batch.as_str(),
        entry.day.as_str(),
        entry.time_range.as_str(),
    ]
    .into_iter()
    .chain(entry.faculty_names())
    .filter(|field| !field.is_empty())
}

/// Choices for the filter dropdowns, derived from the loaded entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterOptions {
    pub days: Vec<String>,
    pub batches: Vec<String>,
    pub sections: Vec<String>,
}

pub fn filter_options(entries: &[RoutineEntry], days: &DayOrder) -> FilterOptions {
    let days = days
        .days()
        .iter()
        .filter(|d| entries.iter().any(|e| e.day.trim() == d.as_str()))
        .cloned()
        .collect();

    FilterOptions {
        days,
        batches: distinct(entries.iter().map(|e| e.batch.as_str())),
        sections: distinct(entries.iter().map(|e| e.section.as_str())),
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for value in values {
        if !value.is_empty() && !seen.iter().any(|s| s == value) {
            seen.push(value.to_string());
        }
    }
    seen
}
