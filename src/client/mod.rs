pub mod dto;

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, StatusCode, Url};
use serde::de::DeserializeOwned;

use crate::config::AppConfig;
use crate::error::AppError;
use crate::models::{
    Course, Faculty, RoutineDraft, RoutineEntry, Semester, Settings, SettingsScope,
};
use crate::routine::RoutineFilter;

/// The remote routine backend. It owns persistence, auth, and conflict checks.
#[async_trait]
pub trait RoutineApi: Send + Sync {
    async fn fetch_routines(&self, filter: &RoutineFilter) -> Result<Vec<RoutineEntry>, AppError>;
    async fn fetch_settings(&self, scope: SettingsScope) -> Result<Settings, AppError>;
    async fn fetch_faculties(&self) -> Result<Vec<Faculty>, AppError>;
    async fn fetch_courses(&self) -> Result<Vec<Course>, AppError>;
    /// `Err(AppError::Conflict)` when the slot is already taken.
    async fn check_conflict(
        &self,
        draft: &RoutineDraft,
        current_id: Option<&str>,
    ) -> Result<(), AppError>;
    async fn create_routine(&self, draft: &RoutineDraft) -> Result<(), AppError>;
    async fn update_routine(&self, id: &str, draft: &RoutineDraft) -> Result<(), AppError>;
    async fn delete_routine(&self, id: &str) -> Result<(), AppError>;
    /// Drops every routine entry at the end of a semester.
    async fn clear_routines(&self) -> Result<(), AppError>;
    /// Creates the course, or replaces the one stored under `id`.
    async fn save_course(&self, id: Option<&str>, course: &Course) -> Result<(), AppError>;
    async fn delete_course(&self, id: &str) -> Result<(), AppError>;
    async fn save_faculty(&self, id: Option<&str>, faculty: &Faculty) -> Result<(), AppError>;
    async fn delete_faculty(&self, id: &str) -> Result<(), AppError>;
    async fn update_semester(&self, semester: &Semester) -> Result<(), AppError>;
    async fn add_time_range(&self, time_range: &str) -> Result<(), AppError>;
}

pub struct HttpRoutineApi {
    client: Client,
    base_url: String,
    api_token: Option<String>,
}

impl HttpRoutineApi {
    pub fn new(config: &AppConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(15))
            .build()
            .map_err(|e| AppError::Config(format!("Failed to build http client: {}", e)))?;
        Ok(Self {
            client,
            base_url: config.api_url.clone(),
            api_token: config.api_token.clone(),
        })
    }

    fn url(&self, path: &str, params: &[(&str, String)]) -> Result<Url, AppError> {
        let mut url = Url::parse(&format!("{}{}", self.base_url, path))
            .map_err(|e| AppError::Config(format!("Invalid backend url for {}: {}", path, e)))?;
        if !params.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in params {
                pairs.append_pair(key, value);
            }
        }
        Ok(url)
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, AppError> {
        let request = match &self.api_token {
            Some(token) => request.header("Authorization", format!("Bearer {}", token)),
            None => request,
        };

        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = dto::error_message(&body);
        match status {
            StatusCode::NOT_FOUND => Err(AppError::NotFound),
            StatusCode::CONFLICT => Err(AppError::Conflict(message)),
            _ => Err(AppError::Backend {
                status: status.as_u16(),
                message,
            }),
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, AppError> {
        tracing::debug!("GET {}", url);
        let response = self.send(self.client.get(url)).await?;
        let body_text = response.text().await?;

        serde_json::from_str::<T>(&body_text).map_err(|e| {
            tracing::error!("Failed to parse: {}", e);
            AppError::BadRequest(format!("Failed to parse backend response: {}", e))
        })
    }
}

#[async_trait]
impl RoutineApi for HttpRoutineApi {
    async fn fetch_routines(&self, filter: &RoutineFilter) -> Result<Vec<RoutineEntry>, AppError> {
        let url = self.url("/routines", &filter.backend_params())?;
        let records: Option<Vec<serde_json::Value>> = self.get_json(url).await?;

        let mut routines = Vec::new();
        for record in records.unwrap_or_default() {
            match serde_json::from_value::<RoutineEntry>(record) {
                Ok(entry) => routines.push(entry),
                Err(e) => {
                    tracing::warn!("Failed to parse routine entry: {}", e);
                }
            }
        }
        Ok(routines)
    }

    async fn fetch_settings(&self, scope: SettingsScope) -> Result<Settings, AppError> {
        let url = self.url(scope.path(), &[])?;
        self.get_json(url).await
    }

    async fn fetch_faculties(&self) -> Result<Vec<Faculty>, AppError> {
        let url = self.url("/faculties", &[])?;
        let faculties: Option<Vec<Faculty>> = self.get_json(url).await?;
        Ok(faculties.unwrap_or_default())
    }

    async fn fetch_courses(&self) -> Result<Vec<Course>, AppError> {
        let url = self.url("/courses/all", &[])?;
        let response: dto::CourseListResponse = self.get_json(url).await?;
        Ok(response.into_courses())
    }

    async fn check_conflict(
        &self,
        draft: &RoutineDraft,
        current_id: Option<&str>,
    ) -> Result<(), AppError> {
        let query = dto::ConflictQuery {
            day: &draft.day,
            time_range: &draft.time_range,
            room: &draft.room,
            section: &draft.section,
            batch: &draft.batch,
            current_id: current_id.unwrap_or_default(),
        };
        let url = self.url("/routines/check-conflict", &query.params())?;
        self.send(self.client.get(url)).await?;
        Ok(())
    }

    async fn create_routine(&self, draft: &RoutineDraft) -> Result<(), AppError> {
        let url = self.url("/routines", &[])?;
        self.send(self.client.post(url).json(draft)).await?;
        tracing::info!("Created routine {} {} {}", draft.day, draft.time_range, draft.course_code);
        Ok(())
    }

    async fn update_routine(&self, id: &str, draft: &RoutineDraft) -> Result<(), AppError> {
        let url = self.url(&format!("/routines/{}", id), &[])?;
        self.send(self.client.put(url).json(draft)).await?;
        tracing::info!("Updated routine {}", id);
        Ok(())
    }

    async fn delete_routine(&self, id: &str) -> Result<(), AppError> {
        let url = self.url(&format!("/routines/{}", id), &[])?;
        self.send(self.client.delete(url)).await?;
        tracing::info!("Deleted routine {}", id);
        Ok(())
    }

    async fn clear_routines(&self) -> Result<(), AppError> {
        let url = self.url("/routines", &[])?;
        self.send(self.client.delete(url)).await?;
        tracing::warn!("Cleared all routines (end of semester)");
        Ok(())
    }

    async fn save_course(&self, id: Option<&str>, course: &Course) -> Result<(), AppError> {
        let request = match id {
            Some(id) => self.client.put(self.url(&format!("/courses/{}", id), &[])?),
            None => self.client.post(self.url("/courses", &[])?),
        };
        self.send(request.json(course)).await?;
        tracing::info!("Saved course {}", course.course_code);
        Ok(())
    }

    async fn delete_course(&self, id: &str) -> Result<(), AppError> {
        let url = self.url(&format!("/courses/{}", id), &[])?;
        self.send(self.client.delete(url)).await?;
        tracing::info!("Deleted course {}", id);
        Ok(())
    }

    async fn save_faculty(&self, id: Option<&str>, faculty: &Faculty) -> Result<(), AppError> {
        let request = match id {
            Some(id) => self.client.put(self.url(&format!("/faculties/{}", id), &[])?),
            None => self.client.post(self.url("/faculties", &[])?),
        };
        self.send(request.json(faculty)).await?;
        tracing::info!("Saved faculty {}", faculty.name);
        Ok(())
    }

    async fn delete_faculty(&self, id: &str) -> Result<(), AppError> {
        let url = self.url(&format!("/faculties/{}", id), &[])?;
        self.send(self.client.delete(url)).await?;
        tracing::info!("Deleted faculty {}", id);
        Ok(())
    }

    async fn update_semester(&self, semester: &Semester) -> Result<(), AppError> {
        let url = self.url("/settings/semester", &[])?;
        self.send(self.client.put(url).json(semester)).await?;
        tracing::info!("Updated semester to {}", semester.label());
        Ok(())
    }

    async fn add_time_range(&self, time_range: &str) -> Result<(), AppError> {
        let url = self.url("/settings/time-ranges", &[])?;
        let body = dto::TimeRangeBody { time_range };
        self.send(self.client.post(url).json(&body)).await?;
        tracing::info!("Added time slot {}", time_range);
        Ok(())
    }
}
