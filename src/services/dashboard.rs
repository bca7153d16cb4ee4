use serde::Serialize;

use crate::client::RoutineApi;
use crate::error::AppError;
use crate::models::{Course, Faculty, RoutineEntry, Settings, SettingsScope};
use crate::routine::{DayOrder, RoutineFilter};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayCount {
    pub day: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardStats {
    pub total_routines: usize,
    pub total_faculties: usize,
    pub total_courses: usize,
    pub total_rooms: usize,
    pub total_batches: usize,
    pub per_day: Vec<DayCount>,
    /// Largest per-day count, never below 1 so bar widths can divide by it.
    pub max_per_day: usize,
}

pub fn summarize(
    routines: &[RoutineEntry],
    faculties: &[Faculty],
    courses: &[Course],
    settings: &Settings,
    days: &DayOrder,
) -> DashboardStats {
    let per_day: Vec<DayCount> = days
        .days()
        .iter()
        .map(|day| DayCount {
            day: day.clone(),
            count: routines.iter().filter(|r| r.day.trim() == day.as_str()).count(),
        })
        .collect();
    let max_per_day = per_day.iter().map(|d| d.count).max().unwrap_or(0).max(1);

    DashboardStats {
        total_routines: routines.len(),
        total_faculties: faculties.len(),
        total_courses: courses.len(),
        total_rooms: settings.classrooms.len(),
        total_batches: settings.batches.len(),
        per_day,
        max_per_day,
    }
}

/// Loads everything the dashboard needs in parallel.
pub async fn load(api: &dyn RoutineApi, days: &DayOrder) -> Result<DashboardStats, AppError> {
    let all = RoutineFilter::default();
    let (routines, faculties, courses, settings) = tokio::try_join!(
        api.fetch_routines(&all),
        api.fetch_faculties(),
        api.fetch_courses(),
        api.fetch_settings(SettingsScope::Public),
    )?;

    Ok(summarize(&routines, &faculties, &courses, &settings, days))
}
