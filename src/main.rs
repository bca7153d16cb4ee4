use std::sync::Arc;

use routine_board::api::router;
use routine_board::client::{HttpRoutineApi, RoutineApi};
use routine_board::config::AppConfig;
use routine_board::models::SettingsScope;
use routine_board::routine::RoutineFilter;
use routine_board::services::{FeedScheduler, RoutineFeed, SettingsStore};
use routine_board::state::AppState;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "routine_board=debug".to_string()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::new_from_env()?;
    info!("using routine backend at {}", config.api_url);

    let api: Arc<dyn RoutineApi> = Arc::new(HttpRoutineApi::new(&config)?);

    // The admin settings endpoint requires a session token.
    let scope = if config.api_token.is_some() {
        SettingsScope::Admin
    } else {
        SettingsScope::Public
    };
    let settings = Arc::new(SettingsStore::load(api.clone(), scope).await?);

    let feed = Arc::new(RoutineFeed::new(api.clone(), config.fetch_debounce));
    if let Err(e) = feed.request(RoutineFilter::default()).await {
        warn!("initial board load failed: {}", e);
    }

    if let Some(secs) = config.board_refresh_secs {
        let scheduler = FeedScheduler::new(feed.clone(), secs);
        tokio::spawn(scheduler.start());
    }

    let state = AppState { api, settings, feed };
    let app = router(state);

    info!("listening on http://{}", config.bind_addr);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
