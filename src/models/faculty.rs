use serde::{Deserialize, Serialize};

use crate::error::AppError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FacultyType {
    #[default]
    Internal,
    External,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Faculty {
    #[serde(
        rename = "_id",
        alias = "id",
        skip_serializing_if = "String::is_empty",
        deserialize_with = "super::null_as_default"
    )]
    pub id: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub designation: String,
    #[serde(rename = "type", deserialize_with = "super::null_as_default")]
    pub faculty_type: FacultyType,
    #[serde(deserialize_with = "super::null_as_default")]
    pub email: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub phone: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub department: String,
}

impl Faculty {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.name.trim().is_empty() || self.designation.trim().is_empty() {
            return Err(AppError::Validation(
                "Name, Designation, and Type are required.".to_string(),
            ));
        }
        Ok(())
    }

    pub fn matches_query(&self, query: &str) -> bool {
        let q = query.trim().to_lowercase();
        if q.is_empty() {
            return true;
        }
        [
            &self.name,
            &self.designation,
            &self.department,
            &self.email,
            &self.phone,
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(&q))
    }
}
