use std::sync::Arc;
use std::time::Duration;

use tracing::info;

use crate::services::feed::{FeedOutcome, RoutineFeed};

/// Keeps a wall-mounted board current by re-fetching on an interval.
pub struct FeedScheduler {
    feed: Arc<RoutineFeed>,
    interval: Duration,
}

impl FeedScheduler {
    pub fn new(feed: Arc<RoutineFeed>, interval_secs: u64) -> Self {
        Self {
            feed,
            interval: Duration::from_secs(interval_secs),
        }
    }

    /// Runs until the task is aborted. Failed refreshes are logged and retried next tick.
    pub async fn start(self) {
        info!("Starting board refresh scheduler (interval: {:?})", self.interval);

        loop {
            tokio::time::sleep(self.interval).await;

            match self.feed.refresh().await {
                Ok(FeedOutcome::Applied(count)) => {
                    info!("Board refreshed - {} routines", count);
                }
                Ok(FeedOutcome::Superseded) => {
                    info!("Board refresh superseded by a newer filter");
                }
                Err(e) => {
                    tracing::warn!("Board refresh failed: {:?}", e);
                }
            }
        }
    }
}
