use chrono::{DateTime, Utc};

use crate::errors::CadenceResult;
use crate::models::{InsertOutcome, NewNotification, Notification};

/// Persistence collaborator for notifications.
///
/// Implementations must make `insert` idempotent on
/// `(user_id, metadata.rule_id, cooldown_bucket)` whenever `cooldown_bucket`
/// is `Some`, reporting the collision as [`InsertOutcome::Duplicate`].
pub trait NotificationStore: Send + Sync {
    fn insert(&self, notification: &NewNotification) -> CadenceResult<InsertOutcome>;

    /// Count the user's rows created at or after `day_start` and insert only
    /// if fewer than `daily_limit` exist, as one atomic step. Concurrent
    /// callers for the same user can never push the count past the limit.
    /// Returns [`InsertOutcome::QuotaExhausted`] when the limit is reached.
    fn insert_within_quota(
        &self,
        notification: &NewNotification,
        day_start: DateTime<Utc>,
        daily_limit: u32,
    ) -> CadenceResult<InsertOutcome>;

    /// Most recent notification for `(user_id, rule_id)` created strictly after `since`.
    /// Soft-deleted rows still count: deleting a notification does not reset its cooldown.
    fn find_since(
        &self,
        user_id: &str,
        rule_id: &str,
        since: DateTime<Utc>,
    ) -> CadenceResult<Option<Notification>>;

    /// Notifications for `user_id` created at or after `since`, soft-deleted included.
    fn count_since(&self, user_id: &str, since: DateTime<Utc>) -> CadenceResult<usize>;

    // --- UI-facing ---
    fn mark_read(&self, id: &str) -> CadenceResult<()>;
    fn soft_delete(&self, id: &str, at: DateTime<Utc>) -> CadenceResult<()>;
    /// Newest first, soft-deleted excluded.
    fn list_for_user(&self, user_id: &str, limit: usize) -> CadenceResult<Vec<Notification>>;
}
