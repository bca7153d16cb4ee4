use serde::{Deserialize, Serialize};

use crate::models::Course;

/// `/courses/all` answers with a bare array; the paged endpoint wraps it.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum CourseListResponse {
    Plain(Vec<Course>),
    Paged {
        courses: Vec<Course>,
        #[serde(default)]
        total: Option<usize>,
    },
}

impl CourseListResponse {
    pub fn into_courses(self) -> Vec<Course> {
        match self {
            CourseListResponse::Plain(courses) => courses,
            CourseListResponse::Paged { courses, .. } => courses,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Best human-readable message in an error response body.
pub fn error_message(body: &str) -> String {
    let parsed = serde_json::from_str::<ErrorBody>(body).unwrap_or_default();
    parsed
        .message
        .into_iter()
        .chain(parsed.error)
        .find(|m| !m.trim().is_empty())
        .unwrap_or_else(|| {
            if body.trim().is_empty() {
                "no response body".to_string()
            } else {
                body.trim().to_string()
            }
        })
}

#[derive(Debug)]
pub struct ConflictQuery<'a> {
    pub day: &'a str,
    pub time_range: &'a str,
    pub room: &'a str,
    pub section: &'a str,
    pub batch: &'a str,
    pub current_id: &'a str,
}

impl ConflictQuery<'_> {
    pub fn params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("day", self.day.to_string()),
            ("time_range", self.time_range.to_string()),
            ("room", self.room.to_string()),
            ("section", self.section.to_string()),
            ("batch", self.batch.to_string()),
            ("currentId", self.current_id.to_string()),
        ]
    }
}

#[derive(Debug, Serialize)]
pub struct TimeRangeBody<'a> {
    pub time_range: &'a str,
}
