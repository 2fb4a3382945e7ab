//! # cadence-storage
//!
//! Notification persistence behind the `NotificationStore` trait.
//!
//! - [`SqliteNotificationStore`]: single write connection, WAL, versioned
//!   migrations, partial unique index on `(user_id, rule_id, cooldown_bucket)`.
//! - [`InMemoryNotificationStore`]: same semantics in a `Vec`, for tests and embedders.

pub mod memory;
pub mod migrations;
pub mod pool;
pub mod queries;
pub mod store;

pub use memory::InMemoryNotificationStore;
pub use store::SqliteNotificationStore;

use cadence_core::errors::{CadenceError, StorageError};

/// Helper to convert a rusqlite error message into a `CadenceError`.
pub(crate) fn to_storage_err(msg: String) -> CadenceError {
    CadenceError::StorageError(StorageError::SqliteError { message: msg })
}
