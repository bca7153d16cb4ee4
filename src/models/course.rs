use serde::{Deserialize, Serialize};

use crate::error::AppError;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Course {
    #[serde(
        rename = "_id",
        alias = "id",
        skip_serializing_if = "String::is_empty",
        deserialize_with = "super::null_as_default"
    )]
    pub id: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub course_code: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub course_title: String,
    #[serde(deserialize_with = "super::lenient_number")]
    pub credit_hour: Option<f64>,
    #[serde(deserialize_with = "super::null_as_default")]
    pub is_lab: bool,
}

impl Course {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.course_code.trim().is_empty() {
            return Err(AppError::Validation("Course code required".to_string()));
        }
        if self.course_title.trim().is_empty() {
            return Err(AppError::Validation("Course title required".to_string()));
        }
        match self.credit_hour {
            Some(h) if h > 0.0 => Ok(()),
            _ => Err(AppError::Validation("Valid credit hour required".to_string())),
        }
    }

    /// Numeric part after the first `-` of the code (`ICE-4105` -> 4105), 0 when absent.
    pub fn code_number(&self) -> u32 {
        self.course_code
            .split('-')
            .nth(1)
            .and_then(|n| n.trim().parse::<u32>().ok())
            .unwrap_or(0)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CourseKind {
    #[default]
    All,
    Theory,
    Lab,
}

impl CourseKind {
    pub fn matches(self, course: &Course) -> bool {
        match self {
            CourseKind::All => true,
            CourseKind::Theory => !course.is_lab,
            CourseKind::Lab => course.is_lab,
        }
    }
}
