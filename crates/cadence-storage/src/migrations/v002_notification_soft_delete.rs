//! v002: soft delete. Deleted rows stay for cooldown and quota accounting.

use rusqlite::Connection;

use cadence_core::errors::CadenceResult;

use crate::to_storage_err;

pub fn migrate(conn: &Connection) -> CadenceResult<()> {
    conn.execute_batch(
        "
        ALTER TABLE notifications ADD COLUMN deleted_at TEXT;

        CREATE INDEX IF NOT EXISTS idx_notifications_user_live
            ON notifications(user_id, created_at)
            WHERE deleted_at IS NULL;
        ",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}
