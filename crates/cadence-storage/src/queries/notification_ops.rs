//! Notification CRUD. Timestamps are stored as fixed-width RFC 3339 UTC
//! strings (microsecond precision) so lexicographic order is time order.

use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::{params, Connection, ErrorCode, OptionalExtension, Row};

use cadence_core::errors::{CadenceError, CadenceResult, StorageError};
use cadence_core::models::{
    InsertOutcome, NewNotification, Notification, NotificationKind, NotificationMetadata,
    Priority,
};

use crate::to_storage_err;

const COLUMNS: &str = "id, user_id, rule_id, title, message, kind, priority, created_at, \
                       is_read, cooldown_bucket, deleted_at";

pub fn format_ts(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Insert with a fresh v4 id. A unique-index collision on the cooldown
/// bucket is reported as `Duplicate`.
pub fn insert(conn: &Connection, n: &NewNotification) -> CadenceResult<InsertOutcome> {
    let id = uuid::Uuid::new_v4().to_string();
    let result = conn.execute(
        "INSERT INTO notifications
            (id, user_id, rule_id, title, message, kind, priority, created_at, is_read, cooldown_bucket)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, 0, ?9)",
        params![
            id,
            n.user_id,
            n.metadata.rule_id,
            n.title,
            n.message,
            n.kind.as_str(),
            n.priority.as_u8(),
            format_ts(n.created_at),
            n.cooldown_bucket,
        ],
    );
    match result {
        Ok(_) => Ok(InsertOutcome::Inserted { id }),
        Err(rusqlite::Error::SqliteFailure(err, _))
            if err.code == ErrorCode::ConstraintViolation
                && err.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE =>
        {
            Ok(InsertOutcome::Duplicate)
        }
        Err(e) => Err(to_storage_err(e.to_string())),
    }
}

/// Quota check and insert inside one `BEGIN IMMEDIATE` transaction, so the
/// write lock is held from the count until the row lands.
pub fn insert_within_quota(
    conn: &Connection,
    n: &NewNotification,
    day_start: DateTime<Utc>,
    daily_limit: u32,
) -> CadenceResult<InsertOutcome> {
    conn.execute_batch("BEGIN IMMEDIATE")
        .map_err(|e| to_storage_err(e.to_string()))?;

    let outcome = count_since(conn, &n.user_id, day_start).and_then(|sent| {
        if sent >= usize::try_from(daily_limit).unwrap_or(usize::MAX) {
            Ok(InsertOutcome::QuotaExhausted)
        } else {
            insert(conn, n)
        }
    });

    match outcome {
        Ok(outcome) => match conn.execute_batch("COMMIT") {
            Ok(()) => Ok(outcome),
            Err(e) => {
                let _ = conn.execute_batch("ROLLBACK");
                Err(to_storage_err(e.to_string()))
            }
        },
        Err(e) => {
            let _ = conn.execute_batch("ROLLBACK");
            Err(e)
        }
    }
}

pub fn find_since(
    conn: &Connection,
    user_id: &str,
    rule_id: &str,
    since: DateTime<Utc>,
) -> CadenceResult<Option<Notification>> {
    let raw = conn
        .query_row(
            &format!(
                "SELECT {COLUMNS} FROM notifications
                 WHERE user_id = ?1 AND rule_id = ?2 AND created_at > ?3
                 ORDER BY created_at DESC LIMIT 1"
            ),
            params![user_id, rule_id, format_ts(since)],
            RawRow::read,
        )
        .optional()
        .map_err(|e| to_storage_err(e.to_string()))?;
    raw.map(RawRow::into_notification).transpose()
}

pub fn count_since(conn: &Connection, user_id: &str, since: DateTime<Utc>) -> CadenceResult<usize> {
    let count: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM notifications WHERE user_id = ?1 AND created_at >= ?2",
            params![user_id, format_ts(since)],
            |row| row.get(0),
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(usize::try_from(count).unwrap_or(0))
}

pub fn mark_read(conn: &Connection, id: &str) -> CadenceResult<()> {
    let changed = conn
        .execute("UPDATE notifications SET is_read = 1 WHERE id = ?1", params![id])
        .map_err(|e| to_storage_err(e.to_string()))?;
    require_row(changed, id)
}

/// Idempotent: a second delete keeps the first timestamp.
pub fn soft_delete(conn: &Connection, id: &str, at: DateTime<Utc>) -> CadenceResult<()> {
    let changed = conn
        .execute(
            "UPDATE notifications SET deleted_at = COALESCE(deleted_at, ?2) WHERE id = ?1",
            params![id, format_ts(at)],
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
    require_row(changed, id)
}

pub fn list_for_user(
    conn: &Connection,
    user_id: &str,
    limit: usize,
) -> CadenceResult<Vec<Notification>> {
    let mut stmt = conn
        .prepare(&format!(
            "SELECT {COLUMNS} FROM notifications
             WHERE user_id = ?1 AND deleted_at IS NULL
             ORDER BY created_at DESC, rowid DESC
             LIMIT ?2"
        ))
        .map_err(|e| to_storage_err(e.to_string()))?;
    let limit = i64::try_from(limit).unwrap_or(i64::MAX);
    let rows = stmt
        .query_map(params![user_id, limit], RawRow::read)
        .map_err(|e| to_storage_err(e.to_string()))?;

    let mut out = Vec::new();
    for row in rows {
        let raw = row.map_err(|e| to_storage_err(e.to_string()))?;
        out.push(raw.into_notification()?);
    }
    Ok(out)
}

fn require_row(changed: usize, id: &str) -> CadenceResult<()> {
    if changed == 0 {
        return Err(CadenceError::NotificationNotFound { id: id.to_string() });
    }
    Ok(())
}

/// Column values as stored, before domain validation.
struct RawRow {
    id: String,
    user_id: String,
    rule_id: String,
    title: String,
    message: String,
    kind: String,
    priority: u8,
    created_at: String,
    is_read: bool,
    cooldown_bucket: Option<i64>,
    deleted_at: Option<String>,
}

impl RawRow {
    fn read(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            user_id: row.get(1)?,
            rule_id: row.get(2)?,
            title: row.get(3)?,
            message: row.get(4)?,
            kind: row.get(5)?,
            priority: row.get(6)?,
            created_at: row.get(7)?,
            is_read: row.get(8)?,
            cooldown_bucket: row.get(9)?,
            deleted_at: row.get(10)?,
        })
    }

    fn into_notification(self) -> CadenceResult<Notification> {
        let kind = NotificationKind::parse(&self.kind)
            .ok_or_else(|| corrupt(&self.id, format!("unknown kind '{}'", self.kind)))?;
        let priority = Priority::try_from(self.priority).map_err(|e| corrupt(&self.id, e))?;
        let created_at = parse_ts(&self.id, &self.created_at)?;
        let deleted_at = self
            .deleted_at
            .as_deref()
            .map(|s| parse_ts(&self.id, s))
            .transpose()?;

        Ok(Notification {
            id: self.id,
            user_id: self.user_id,
            title: self.title,
            message: self.message,
            kind,
            priority,
            metadata: NotificationMetadata {
                rule_id: self.rule_id,
            },
            created_at,
            is_read: self.is_read,
            cooldown_bucket: self.cooldown_bucket,
            deleted_at,
        })
    }
}

fn parse_ts(id: &str, s: &str) -> CadenceResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| corrupt(id, format!("bad timestamp '{s}': {e}")))
}

fn corrupt(id: &str, details: String) -> CadenceError {
    StorageError::CorruptRow {
        table: "notifications".to_string(),
        details: format!("{id}: {details}"),
    }
    .into()
}
