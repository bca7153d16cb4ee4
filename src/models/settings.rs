use std::str::FromStr;

use chrono::Month;
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::routine::DayOrder;
use crate::routine::{clock_minutes, start_minutes};

/// Which settings endpoint to read: the public one needs no session token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsScope {
    Public,
    Admin,
}

impl SettingsScope {
    pub fn path(self) -> &'static str {
        match self {
            SettingsScope::Public => "/public-settings",
            SettingsScope::Admin => "/settings",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Semester {
    #[serde(deserialize_with = "super::null_as_default")]
    pub start_month: String,
    #[serde(deserialize_with = "super::lenient_number")]
    pub start_year: Option<f64>,
    #[serde(deserialize_with = "super::null_as_default")]
    pub end_month: String,
    #[serde(deserialize_with = "super::lenient_number")]
    pub end_year: Option<f64>,
}

impl Semester {
    pub fn validate(&self) -> Result<(), AppError> {
        for month in [&self.start_month, &self.end_month] {
            Month::from_str(month.trim())
                .map_err(|_| AppError::Validation(format!("Unknown month: {}", month)))?;
        }
        Ok(())
    }

    /// `"January 2025 - June 2025"`; parts that are missing are left out.
    pub fn label(&self) -> String {
        let side = |month: &str, year: Option<f64>| {
            let month = Month::from_str(month.trim())
                .map(|m| m.name().to_string())
                .unwrap_or_else(|_| month.trim().to_string());
            match year {
                Some(y) => format!("{} {}", month, y as i64).trim().to_string(),
                None => month,
            }
        };
        let start = side(&self.start_month, self.start_year);
        let end = side(&self.end_month, self.end_year);

        match (start.is_empty(), end.is_empty()) {
            (false, false) => format!("{} - {}", start, end),
            (false, true) => start,
            (true, false) => end,
            (true, true) => String::new(),
        }
    }
}

/// Semester-wide configuration, loaded once per session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    #[serde(deserialize_with = "super::null_as_default")]
    pub days: Vec<String>,
    #[serde(deserialize_with = "super::null_as_default")]
    pub time_ranges: Vec<String>,
    #[serde(deserialize_with = "super::null_as_default")]
    pub classrooms: Vec<String>,
    #[serde(deserialize_with = "super::null_as_default")]
    pub sections: Vec<String>,
    #[serde(deserialize_with = "super::null_as_default")]
    pub batches: Vec<String>,
    #[serde(alias = "universityName", deserialize_with = "super::null_as_default")]
    pub university_name: String,
    #[serde(alias = "departmentName", deserialize_with = "super::null_as_default")]
    pub department_name: String,
    #[serde(alias = "termType", deserialize_with = "super::null_as_default")]
    pub term_type: String,
    #[serde(alias = "logo", deserialize_with = "super::null_as_default")]
    pub logo_url: String,
    pub semester: Option<Semester>,
}

impl Settings {
    /// Configured days, or the canonical Sunday..Thursday week when none are set.
    pub fn day_order(&self) -> DayOrder {
        if self.days.iter().all(|d| d.trim().is_empty()) {
            DayOrder::default()
        } else {
            DayOrder::new(self.days.iter().filter(|d| !d.trim().is_empty()).cloned())
        }
    }

    /// Time slots ordered by start minute; unparseable slots go last.
    pub fn time_axis(&self) -> Vec<String> {
        let mut slots = self.time_ranges.clone();
        slots.sort_by_key(|slot| start_minutes(slot).unwrap_or(u32::MAX));
        slots
    }

    /// Adds a `HH:MM-HH:MM` slot built from its two ends.
    pub fn add_time_range(&mut self, start: &str, end: &str) -> Result<String, AppError> {
        let slot = format!("{}-{}", start.trim(), end.trim());
        match (clock_minutes(start), clock_minutes(end)) {
            (Some(from), Some(to)) if from < to => {}
            _ => {
                return Err(AppError::Validation(format!("Invalid time range: {}", slot)));
            }
        }
        if !self.time_ranges.contains(&slot) {
            self.time_ranges.push(slot.clone());
        }
        Ok(slot)
    }
}
