use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::info;

use crate::client::RoutineApi;
use crate::error::AppError;
use crate::models::{Semester, Settings, SettingsScope};

/// Holds the settings snapshot for the running session.
///
/// Readers get an `Arc` to an immutable snapshot; `reload` swaps in a new
/// one after the backend has been changed.
pub struct SettingsStore {
    api: Arc<dyn RoutineApi>,
    scope: SettingsScope,
    current: RwLock<Arc<Settings>>,
}

impl SettingsStore {
    pub async fn load(api: Arc<dyn RoutineApi>, scope: SettingsScope) -> Result<Self, AppError> {
        let settings = api.fetch_settings(scope).await?;
        info!(
            "Loaded settings: {} time slots, {} rooms, {} batches",
            settings.time_ranges.len(),
            settings.classrooms.len(),
            settings.batches.len()
        );
        Ok(Self::with_snapshot(api, scope, settings))
    }

    pub fn with_snapshot(api: Arc<dyn RoutineApi>, scope: SettingsScope, settings: Settings) -> Self {
        Self {
            api,
            scope,
            current: RwLock::new(Arc::new(settings)),
        }
    }

    pub async fn snapshot(&self) -> Arc<Settings> {
        self.current.read().await.clone()
    }

    /// Refetches; on failure the previous snapshot stays in place.
    pub async fn reload(&self) -> Result<Arc<Settings>, AppError> {
        let fresh = Arc::new(self.api.fetch_settings(self.scope).await?);
        *self.current.write().await = fresh.clone();
        info!("Settings reloaded");
        Ok(fresh)
    }

    pub async fn update_semester(&self, semester: &Semester) -> Result<Arc<Settings>, AppError> {
        semester.validate()?;
        self.api.update_semester(semester).await?;
        self.reload().await
    }

    /// Adds the `start-end` slot unless it is already configured.
    pub async fn add_time_range(&self, start: &str, end: &str) -> Result<Arc<Settings>, AppError> {
        let mut settings = self.snapshot().await.as_ref().clone();
        let before = settings.time_ranges.len();
        let slot = settings.add_time_range(start, end)?;
        if settings.time_ranges.len() == before {
            return Ok(self.snapshot().await);
        }
        self.api.add_time_range(&slot).await?;
        self.reload().await
    }
}
