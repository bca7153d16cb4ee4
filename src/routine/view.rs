use serde::Serialize;

use crate::format::format_range_12h;
use crate::models::{RoutineEntry, Settings};
use crate::palette::{DEFAULT_PALETTE, LegendItem, legend};
use crate::routine::{
    FilterOptions, RoutineFilter, RowGroup, TimetableGrid, filter_options, group_rows, sort_entries,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Header {
    pub university_name: String,
    pub department_name: String,
    pub term_type: String,
    pub logo_url: String,
    pub semester: String,
}

impl From<&Settings> for Header {
    fn from(settings: &Settings) -> Self {
        Self {
            university_name: settings.university_name.clone(),
            department_name: settings.department_name.clone(),
            term_type: settings.term_type.clone(),
            logo_url: settings.logo_url.clone(),
            semester: settings
                .semester
                .as_ref()
                .map(|s| s.label())
                .unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Column {
    pub time_range: String,
    pub label: String,
}

/// Everything the public timetable page renders.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimetableView {
    pub header: Header,
    pub columns: Vec<Column>,
    pub legend: Vec<LegendItem>,
    pub days: TimetableGrid,
    pub total: usize,
    pub empty: bool,
}

impl TimetableView {
    pub fn build(entries: &[RoutineEntry], settings: &Settings) -> Self {
        let columns = settings
            .time_axis()
            .into_iter()
            .map(|time_range| Column {
                label: format_range_12h(&time_range),
                time_range,
            })
            .collect();

        Self {
            header: Header::from(settings),
            columns,
            legend: legend(&settings.batches, &DEFAULT_PALETTE),
            days: TimetableGrid::build(entries, &settings.day_order()),
            total: entries.len(),
            empty: entries.is_empty(),
        }
    }
}

/// Admin table: filtered, sorted rows grouped for cell merging.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoutineTableView {
    pub rows: Vec<RowGroup>,
    pub options: FilterOptions,
    pub total: usize,
    pub empty: bool,
}

impl RoutineTableView {
    pub fn build(entries: &[RoutineEntry], filter: &RoutineFilter, settings: &Settings) -> Self {
        let days = settings.day_order();
        let sorted = sort_entries(&filter.apply(entries), &days);

        Self {
            total: sorted.len(),
            empty: sorted.is_empty(),
            rows: group_rows(&sorted),
            options: filter_options(entries, &days),
        }
    }
}
