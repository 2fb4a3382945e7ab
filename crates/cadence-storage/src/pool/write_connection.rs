//! Single write connection behind a `std::sync::Mutex`.
//! All writes (and, for this store, reads) are serialized through it.
//! Blocking on the lock is safe from any thread, including async workers.

use std::path::Path;
use std::sync::Mutex;

use rusqlite::Connection;

use cadence_core::errors::{CadenceError, CadenceResult, StorageError};

use super::pragmas::apply_pragmas;
use crate::to_storage_err;

pub struct WriteConnection {
    conn: Mutex<Connection>,
}

impl WriteConnection {
    pub fn open(path: &Path, busy_timeout_ms: u32) -> CadenceResult<Self> {
        let conn = Connection::open(path).map_err(|e| to_storage_err(e.to_string()))?;
        apply_pragmas(&conn, busy_timeout_ms)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Open an in-memory database (for testing).
    pub fn open_in_memory() -> CadenceResult<Self> {
        let conn = Connection::open_in_memory().map_err(|e| to_storage_err(e.to_string()))?;
        apply_pragmas(&conn, 0)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Run `f` with exclusive access to the connection. A poisoned lock
    /// reports the store as unavailable.
    pub fn with_conn<F, T>(&self, f: F) -> CadenceResult<T>
    where
        F: FnOnce(&Connection) -> CadenceResult<T>,
    {
        let guard = self.conn.lock().map_err(|_| {
            CadenceError::StorageError(StorageError::Unavailable {
                reason: "write connection lock poisoned".to_string(),
            })
        })?;
        f(&guard)
    }
}
