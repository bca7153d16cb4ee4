use std::sync::Arc;

use tracing::info;

use crate::client::RoutineApi;
use crate::error::AppError;
use crate::models::{Course, Faculty};

/// Admin maintenance of the course and faculty catalogs.
pub struct CatalogService {
    api: Arc<dyn RoutineApi>,
}

fn require_id(id: &str, what: &str) -> Result<(), AppError> {
    if id.trim().is_empty() {
        return Err(AppError::BadRequest(format!("{} id is required", what)));
    }
    Ok(())
}

impl CatalogService {
    pub fn new(api: Arc<dyn RoutineApi>) -> Self {
        Self { api }
    }

    pub async fn save_course(&self, id: Option<&str>, course: &Course) -> Result<(), AppError> {
        course.validate()?;
        if let Some(id) = id {
            require_id(id, "Course")?;
        }
        self.api.save_course(id, course).await
    }

    pub async fn delete_course(&self, id: &str) -> Result<(), AppError> {
        require_id(id, "Course")?;
        self.api.delete_course(id).await
    }

    pub async fn save_faculty(&self, id: Option<&str>, faculty: &Faculty) -> Result<(), AppError> {
        faculty.validate()?;
        if let Some(id) = id {
            require_id(id, "Faculty")?;
        }
        self.api.save_faculty(id, faculty).await
    }

    pub async fn delete_faculty(&self, id: &str) -> Result<(), AppError> {
        require_id(id, "Faculty")?;
        info!("Removing faculty {}", id);
        self.api.delete_faculty(id).await
    }
}
