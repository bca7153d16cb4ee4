use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use serde::Serialize;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::client::RoutineApi;
use crate::error::AppError;
use crate::models::RoutineEntry;
use crate::routine::RoutineFilter;

/// Last successfully fetched routines for the public board.
#[derive(Debug, Clone, Default, Serialize)]
pub struct FeedSnapshot {
    /// Ticket of the request that produced `entries`; 0 before the first load.
    pub ticket: u64,
    pub filter: RoutineFilter,
    pub entries: Vec<RoutineEntry>,
    pub last_error: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedOutcome {
    /// The response was displayed; carries the number of entries.
    Applied(usize),
    /// A newer request was issued first; this one was dropped.
    Superseded,
}

/// Fetches routines for the current filter with last-write-wins semantics.
///
/// Every request takes a ticket. After the debounce window and again after
/// the response arrives, a request whose ticket is no longer the newest
/// gives up, so a slow stale response never replaces a fresher one.
pub struct RoutineFeed {
    api: Arc<dyn RoutineApi>,
    debounce: Duration,
    latest: AtomicU64,
    state: RwLock<FeedSnapshot>,
}

impl RoutineFeed {
    pub fn new(api: Arc<dyn RoutineApi>, debounce: Duration) -> Self {
        Self {
            api,
            debounce,
            latest: AtomicU64::new(0),
            state: RwLock::new(FeedSnapshot::default()),
        }
    }

    pub async fn snapshot(&self) -> FeedSnapshot {
        self.state.read().await.clone()
    }

    fn is_current(&self, ticket: u64) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket
    }

    pub async fn request(&self, filter: RoutineFilter) -> Result<FeedOutcome, AppError> {
        let ticket = self.latest.fetch_add(1, Ordering::SeqCst) + 1;

        if !self.debounce.is_zero() {
            tokio::time::sleep(self.debounce).await;
            if !self.is_current(ticket) {
                debug!("Feed request {} debounced away", ticket);
                return Ok(FeedOutcome::Superseded);
            }
        }

        let result = self.api.fetch_routines(&filter).await;

        let mut state = self.state.write().await;
        if !self.is_current(ticket) {
            debug!("Dropping stale feed response {}", ticket);
            return Ok(FeedOutcome::Superseded);
        }

        match result {
            Ok(entries) => {
                let count = entries.len();
                *state = FeedSnapshot {
                    ticket,
                    filter,
                    entries,
                    last_error: None,
                };
                info!("Feed updated with {} routines (request {})", count, ticket);
                Ok(FeedOutcome::Applied(count))
            }
            Err(e) => {
                warn!("Feed request {} failed: {}", ticket, e);
                state.last_error = Some("Failed to load routines. Please try again.".to_string());
                Err(e)
            }
        }
    }

    /// Re-runs the request for the filter currently on display.
    pub async fn refresh(&self) -> Result<FeedOutcome, AppError> {
        let filter = self.state.read().await.filter.clone();
        self.request(filter).await
    }
}
