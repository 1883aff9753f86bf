//! Record schema for the history list.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use chrono::{DateTime, Utc};

/// Moderation outcome of a submitted post.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModerationStatus {
    /// Still awaiting review.
    Pending,
    /// Rejected by moderation; `block_reason` carries the explanation.
    Blocked,
}

/// One past post as delivered by the history source.
///
/// Invariant: `block_reason` is `Some` if and only if `moderation_status`
/// is [`ModerationStatus::Blocked`]. Records are immutable once fetched.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct HistoryItem {
    pub id: String,
    pub text: String,
    pub created_at: DateTime<Utc>,
    pub moderation_status: ModerationStatus,
    #[serde(default)]
    pub block_reason: Option<String>,
}
