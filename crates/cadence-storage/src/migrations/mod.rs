//! Versioned schema migrations, tracked in `schema_version`.

mod v001_notifications;
mod v002_notification_soft_delete;

use rusqlite::{params, Connection};
use tracing::info;

use cadence_core::errors::{CadenceResult, StorageError};

use crate::to_storage_err;

type Migration = fn(&Connection) -> CadenceResult<()>;

const MIGRATIONS: &[(u32, Migration)] = &[
    (1, v001_notifications::migrate),
    (2, v002_notification_soft_delete::migrate),
];

/// Latest schema version known to this build.
pub const LATEST_VERSION: u32 = 2;

/// Apply every migration newer than the recorded schema version.
pub fn run_migrations(conn: &Connection) -> CadenceResult<u32> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS schema_version (
            version     INTEGER PRIMARY KEY,
            applied_at  TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
        );
        ",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;

    let current = current_version(conn)?;
    for (version, migrate) in MIGRATIONS {
        if *version <= current {
            continue;
        }
        migrate(conn).map_err(|e| StorageError::MigrationFailed {
            version: *version,
            reason: e.to_string(),
        })?;
        conn.execute(
            "INSERT INTO schema_version (version) VALUES (?1)",
            params![version],
        )
        .map_err(|e| StorageError::MigrationFailed {
            version: *version,
            reason: e.to_string(),
        })?;
        info!(version, "applied schema migration");
    }
    current_version(conn)
}

pub fn current_version(conn: &Connection) -> CadenceResult<u32> {
    conn.query_row(
        "SELECT COALESCE(MAX(version), 0) FROM schema_version",
        [],
        |row| row.get(0),
    )
    .map_err(|e| to_storage_err(e.to_string()))
}
