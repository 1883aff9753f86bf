//! History source: the asynchronous collaborator behind the history panel.
//!
//! DESIGN
//! ======
//! The panel talks to a trait object provided through context, so the
//! shipped simulated source and any test double differ only in this seam.
//! In the browser the simulated source sleeps to imitate a round trip; on
//! native targets it resolves immediately, which keeps the state tests
//! deterministic without timers.
//!
//! ERROR HANDLING
//! ==============
//! The contract is fallible even though the simulated source always
//! succeeds; callers surface `Err` as an inline panel message.

#[cfg(test)]
#[path = "source_test.rs"]
mod source_test;

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};

use super::types::{HistoryItem, ModerationStatus};

/// Simulated fetch round-trip latency.
pub const FETCH_DELAY_MS: u64 = 600;

/// Simulated clear round-trip latency.
pub const CLEAR_DELAY_MS: u64 = 300;

/// Asynchronous provider of past-post records.
#[async_trait(?Send)]
pub trait HistorySource {
    /// Fetch the caller's post history, newest first.
    async fn fetch_history(&self) -> Result<Vec<HistoryItem>, String>;

    /// Erase the caller's post history.
    async fn clear_history(&self) -> Result<(), String>;
}

/// Cloneable context handle around the active source.
#[derive(Clone)]
pub struct HistorySourceHandle(pub Arc<dyn HistorySource + Send + Sync>);

impl HistorySourceHandle {
    /// Handle around the shipped [`SimulatedHistorySource`].
    pub fn simulated() -> Self {
        Self(Arc::new(SimulatedHistorySource))
    }
}

/// Stand-in for a real backend: fixed records behind a short delay.
#[derive(Clone, Copy, Debug, Default)]
pub struct SimulatedHistorySource;

/// The fixed dataset, aged relative to `now`.
pub(crate) fn seeded_items(now: DateTime<Utc>) -> Vec<HistoryItem> {
    vec![
        HistoryItem {
            id: uuid::Uuid::new_v4().to_string(),
            text: "dnjskh".to_owned(),
            created_at: now - Duration::hours(1),
            moderation_status: ModerationStatus::Pending,
            block_reason: None,
        },
        HistoryItem {
            id: uuid::Uuid::new_v4().to_string(),
            text: "городок".to_owned(),
            created_at: now - Duration::hours(2),
            moderation_status: ModerationStatus::Blocked,
            block_reason: Some("Неинтересный".to_owned()),
        },
        HistoryItem {
            id: uuid::Uuid::new_v4().to_string(),
            text: "ещё один пост".to_owned(),
            created_at: now - Duration::hours(4),
            moderation_status: ModerationStatus::Pending,
            block_reason: None,
        },
    ]
}

#[async_trait(?Send)]
impl HistorySource for SimulatedHistorySource {
    async fn fetch_history(&self) -> Result<Vec<HistoryItem>, String> {
        #[cfg(feature = "csr")]
        gloo_timers::future::sleep(std::time::Duration::from_millis(FETCH_DELAY_MS)).await;
        Ok(seeded_items(Utc::now()))
    }

    async fn clear_history(&self) -> Result<(), String> {
        #[cfg(feature = "csr")]
        gloo_timers::future::sleep(std::time::Duration::from_millis(CLEAR_DELAY_MS)).await;
        Ok(())
    }
}
