//! In-memory `NotificationStore` with the same uniqueness and cooldown
//! semantics as the SQLite store.

use std::sync::{Mutex, MutexGuard};

use chrono::{DateTime, Utc};

use cadence_core::errors::{CadenceError, CadenceResult, StorageError};
use cadence_core::models::{InsertOutcome, NewNotification, Notification};
use cadence_core::traits::NotificationStore;

#[derive(Debug, Default)]
pub struct InMemoryNotificationStore {
    rows: Mutex<Vec<Notification>>,
}

impl InMemoryNotificationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every stored row, soft-deleted included, in insertion order.
    pub fn snapshot(&self) -> CadenceResult<Vec<Notification>> {
        Ok(self.lock()?.clone())
    }

    pub fn len(&self) -> usize {
        self.lock().map(|rows| rows.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> CadenceResult<MutexGuard<'_, Vec<Notification>>> {
        self.rows.lock().map_err(|_| {
            CadenceError::StorageError(StorageError::Unavailable {
                reason: "in-memory store lock poisoned".to_string(),
            })
        })
    }

    fn with_row<F>(&self, id: &str, f: F) -> CadenceResult<()>
    where
        F: FnOnce(&mut Notification),
    {
        let mut rows = self.lock()?;
        let row = rows
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or_else(|| CadenceError::NotificationNotFound { id: id.to_string() })?;
        f(row);
        Ok(())
    }
}

impl NotificationStore for InMemoryNotificationStore {
    fn insert(&self, n: &NewNotification) -> CadenceResult<InsertOutcome> {
        let mut rows = self.lock()?;
        Ok(insert_locked(&mut rows, n))
    }

    fn insert_within_quota(
        &self,
        n: &NewNotification,
        day_start: DateTime<Utc>,
        daily_limit: u32,
    ) -> CadenceResult<InsertOutcome> {
        let mut rows = self.lock()?;
        let sent = rows
            .iter()
            .filter(|r| r.user_id == n.user_id && r.created_at >= day_start)
            .count();
        if sent >= usize::try_from(daily_limit).unwrap_or(usize::MAX) {
            return Ok(InsertOutcome::QuotaExhausted);
        }
        Ok(insert_locked(&mut rows, n))
    }

    fn find_since(
        &self,
        user_id: &str,
        rule_id: &str,
        since: DateTime<Utc>,
    ) -> CadenceResult<Option<Notification>> {
        Ok(self
            .lock()?
            .iter()
            .filter(|n| n.user_id == user_id && n.metadata.rule_id == rule_id && n.created_at > since)
            .max_by_key(|n| n.created_at)
            .cloned())
    }

    fn count_since(&self, user_id: &str, since: DateTime<Utc>) -> CadenceResult<usize> {
        Ok(self
            .lock()?
            .iter()
            .filter(|n| n.user_id == user_id && n.created_at >= since)
            .count())
    }

    fn mark_read(&self, id: &str) -> CadenceResult<()> {
        self.with_row(id, |n| n.is_read = true)
    }

    fn soft_delete(&self, id: &str, at: DateTime<Utc>) -> CadenceResult<()> {
        self.with_row(id, |n| {
            n.deleted_at.get_or_insert(at);
        })
    }

    fn list_for_user(&self, user_id: &str, limit: usize) -> CadenceResult<Vec<Notification>> {
        let rows = self.lock()?;
        let mut live: Vec<(usize, &Notification)> = rows
            .iter()
            .enumerate()
            .filter(|(_, n)| n.user_id == user_id && n.deleted_at.is_none())
            .collect();
        live.sort_by(|(ia, a), (ib, b)| b.created_at.cmp(&a.created_at).then(ib.cmp(ia)));
        Ok(live.into_iter().take(limit).map(|(_, n)| n.clone()).collect())
    }
}

/// Bucket check and push; the caller holds the lock.
fn insert_locked(rows: &mut Vec<Notification>, n: &NewNotification) -> InsertOutcome {
    if let Some(bucket) = n.cooldown_bucket {
        let taken = rows.iter().any(|r| {
            r.user_id == n.user_id
                && r.metadata.rule_id == n.metadata.rule_id
                && r.cooldown_bucket == Some(bucket)
        });
        if taken {
            return InsertOutcome::Duplicate;
        }
    }
    let id = uuid::Uuid::new_v4().to_string();
    rows.push(Notification {
        id: id.clone(),
        user_id: n.user_id.clone(),
        title: n.title.clone(),
        message: n.message.clone(),
        kind: n.kind,
        priority: n.priority,
        metadata: n.metadata.clone(),
        created_at: n.created_at,
        is_read: false,
        cooldown_bucket: n.cooldown_bucket,
        deleted_at: None,
    });
    InsertOutcome::Inserted { id }
}
