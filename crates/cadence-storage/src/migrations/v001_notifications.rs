//! v001: notifications table and lookup indexes.

use rusqlite::Connection;

use cadence_core::errors::CadenceResult;

use crate::to_storage_err;

pub fn migrate(conn: &Connection) -> CadenceResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS notifications (
            id               TEXT PRIMARY KEY,
            user_id          TEXT NOT NULL,
            rule_id          TEXT NOT NULL,
            title            TEXT NOT NULL,
            message          TEXT NOT NULL,
            kind             TEXT NOT NULL,
            priority         INTEGER NOT NULL CHECK (priority BETWEEN 1 AND 3),
            created_at       TEXT NOT NULL,
            is_read          INTEGER NOT NULL DEFAULT 0,
            cooldown_bucket  INTEGER
        );

        CREATE INDEX IF NOT EXISTS idx_notifications_user_rule_created
            ON notifications(user_id, rule_id, created_at);
        CREATE INDEX IF NOT EXISTS idx_notifications_user_created
            ON notifications(user_id, created_at);

        CREATE UNIQUE INDEX IF NOT EXISTS uq_notifications_cooldown
            ON notifications(user_id, rule_id, cooldown_bucket)
            WHERE cooldown_bucket IS NOT NULL;
        ",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}
