//! SqliteNotificationStore: owns the write connection, runs migrations on
//! open, implements `NotificationStore`.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use tracing::debug;

use cadence_core::config::StorageConfig;
use cadence_core::errors::CadenceResult;
use cadence_core::models::{InsertOutcome, NewNotification, Notification};
use cadence_core::traits::NotificationStore;

use crate::migrations;
use crate::pool::{pragmas, WriteConnection};
use crate::queries::notification_ops;

pub struct SqliteNotificationStore {
    writer: WriteConnection,
    db_path: Option<PathBuf>,
}

impl SqliteNotificationStore {
    /// Open (creating if needed) the database at `config.db_path`.
    pub fn open(config: &StorageConfig) -> CadenceResult<Self> {
        Self::open_path(Path::new(&config.db_path), config.busy_timeout_ms)
    }

    pub fn open_path(path: &Path, busy_timeout_ms: u32) -> CadenceResult<Self> {
        let store = Self {
            writer: WriteConnection::open(path, busy_timeout_ms)?,
            db_path: Some(path.to_path_buf()),
        };
        store.initialize()?;
        Ok(store)
    }

    /// Open an in-memory database (for testing).
    pub fn open_in_memory() -> CadenceResult<Self> {
        let store = Self {
            writer: WriteConnection::open_in_memory()?,
            db_path: None,
        };
        store.initialize()?;
        Ok(store)
    }

    fn initialize(&self) -> CadenceResult<()> {
        self.writer.with_conn(|conn| {
            let version = migrations::run_migrations(conn)?;
            debug!(version, path = ?self.db_path, "notification store ready");
            Ok(())
        })
    }

    pub fn db_path(&self) -> Option<&Path> {
        self.db_path.as_deref()
    }

    pub fn schema_version(&self) -> CadenceResult<u32> {
        self.writer.with_conn(migrations::current_version)
    }

    /// Whether the file-backed database is running in WAL mode.
    pub fn is_wal(&self) -> CadenceResult<bool> {
        self.writer.with_conn(pragmas::verify_wal_mode)
    }
}

impl NotificationStore for SqliteNotificationStore {
    fn insert(&self, notification: &NewNotification) -> CadenceResult<InsertOutcome> {
        self.writer
            .with_conn(|conn| notification_ops::insert(conn, notification))
    }

    fn insert_within_quota(
        &self,
        notification: &NewNotification,
        day_start: DateTime<Utc>,
        daily_limit: u32,
    ) -> CadenceResult<InsertOutcome> {
        self.writer.with_conn(|conn| {
            notification_ops::insert_within_quota(conn, notification, day_start, daily_limit)
        })
    }

    fn find_since(
        &self,
        user_id: &str,
        rule_id: &str,
        since: DateTime<Utc>,
    ) -> CadenceResult<Option<Notification>> {
        self.writer
            .with_conn(|conn| notification_ops::find_since(conn, user_id, rule_id, since))
    }

    fn count_since(&self, user_id: &str, since: DateTime<Utc>) -> CadenceResult<usize> {
        self.writer
            .with_conn(|conn| notification_ops::count_since(conn, user_id, since))
    }

    fn mark_read(&self, id: &str) -> CadenceResult<()> {
        self.writer
            .with_conn(|conn| notification_ops::mark_read(conn, id))
    }

    fn soft_delete(&self, id: &str, at: DateTime<Utc>) -> CadenceResult<()> {
        self.writer
            .with_conn(|conn| notification_ops::soft_delete(conn, id, at))
    }

    fn list_for_user(&self, user_id: &str, limit: usize) -> CadenceResult<Vec<Notification>> {
        self.writer
            .with_conn(|conn| notification_ops::list_for_user(conn, user_id, limit))
    }
}
