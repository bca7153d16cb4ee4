//! Listing helpers for the course and faculty admin pages.

use serde::{Deserialize, Serialize};

use crate::models::{Course, CourseKind, Faculty, FacultyType};
use crate::routine::{Page, paginate};

pub const DEFAULT_PAGE_SIZE: usize = 10;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CourseQuery {
    pub kind: CourseKind,
    pub q: Option<String>,
    pub page: Option<usize>,
    pub limit: Option<usize>,
}

pub fn list_courses(courses: &[Course], query: &CourseQuery) -> Page<Course> {
    let needle = query
        .q
        .as_deref()
        .map(|q| q.trim().to_lowercase())
        .unwrap_or_default();

    let mut matching: Vec<Course> = courses
        .iter()
        .filter(|c| query.kind.matches(c))
        .filter(|c| {
            needle.is_empty()
                || c.course_code.to_lowercase().contains(&needle)
                || c.course_title.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect();
    matching.sort_by_key(Course::code_number);

    paginate(
        &matching,
        query.page.unwrap_or(1),
        query.limit.unwrap_or(DEFAULT_PAGE_SIZE),
    )
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FacultyQuery {
    #[serde(rename = "type")]
    pub faculty_type: Option<String>,
    pub q: Option<String>,
}

impl FacultyQuery {
    /// `Internal` or `External`; anything else (including `All`) means no constraint.
    fn wanted_type(&self) -> Option<FacultyType> {
        match self.faculty_type.as_deref().map(str::trim) {
            Some("Internal") => Some(FacultyType::Internal),
            Some("External") => Some(FacultyType::External),
            _ => None,
        }
    }
}

pub fn list_faculties(faculties: &[Faculty], query: &FacultyQuery) -> Vec<Faculty> {
    let wanted = query.wanted_type();
    faculties
        .iter()
        .filter(|f| wanted.is_none_or(|t| f.faculty_type == t))
        .filter(|f| f.matches_query(query.q.as_deref().unwrap_or_default()))
        .cloned()
        .collect()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FacultyCounts {
    pub internal: usize,
    pub external: usize,
    pub all: usize,
}

pub fn count_faculties(faculties: &[Faculty]) -> FacultyCounts {
    FacultyCounts {
        internal: faculties
            .iter()
            .filter(|f| f.faculty_type == FacultyType::Internal)
            .count(),
        external: faculties
            .iter()
            .filter(|f| f.faculty_type == FacultyType::External)
            .count(),
        all: faculties.len(),
    }
}
