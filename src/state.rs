use std::sync::Arc;

use crate::client::RoutineApi;
use crate::services::{RoutineFeed, SettingsStore};

#[derive(Clone)]
pub struct AppState {
    pub api: Arc<dyn RoutineApi>,
    pub settings: Arc<SettingsStore>,
    pub feed: Arc<RoutineFeed>,
}
