use std::sync::Arc;

use serde::Serialize;
use tracing::{info, warn};

use crate::client::RoutineApi;
use crate::error::AppError;
use crate::models::RoutineDraft;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmitOutcome {
    Created,
    Updated,
}

/// Form submission flow for routine entries.
pub struct RoutineService {
    api: Arc<dyn RoutineApi>,
}

impl RoutineService {
    pub fn new(api: Arc<dyn RoutineApi>) -> Self {
        Self { api }
    }

    /// Validates the draft, asks the backend about slot conflicts, then
    /// creates the entry, or updates it when `editing_id` is given.
    pub async fn submit(
        &self,
        draft: &RoutineDraft,
        editing_id: Option<&str>,
    ) -> Result<SubmitOutcome, AppError> {
        draft.validate()?;

        if let Err(e) = self.api.check_conflict(draft, editing_id).await {
            if let AppError::Conflict(msg) = &e {
                warn!(
                    "Rejected {} {} in room {}: {}",
                    draft.day, draft.time_range, draft.room, msg
                );
            }
            return Err(e);
        }

        match editing_id {
            Some(id) => {
                self.api.update_routine(id, draft).await?;
                Ok(SubmitOutcome::Updated)
            }
            None => {
                self.api.create_routine(draft).await?;
                Ok(SubmitOutcome::Created)
            }
        }
    }

    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        if id.trim().is_empty() {
            return Err(AppError::BadRequest("Routine id is required".to_string()));
        }
        self.api.delete_routine(id).await
    }

    pub async fn end_semester(&self) -> Result<(), AppError> {
        info!("Ending semester: removing all routines");
        self.api.clear_routines().await
    }
}
