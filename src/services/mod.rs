pub mod catalog_service;
pub mod dashboard;
pub mod feed;
pub mod routine_service;
pub mod scheduler;
pub mod settings_store;

pub use catalog_service::CatalogService;
pub use dashboard::DashboardStats;
pub use feed::{FeedOutcome, FeedSnapshot, RoutineFeed};
pub use routine_service::{RoutineService, SubmitOutcome};
pub use scheduler::FeedScheduler;
pub use settings_store::SettingsStore;
