use super::{CatalogError, ConfigError, StorageError};

/// Top-level error aggregating subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum CadenceError {
    #[error("notification not found: {id}")]
    NotificationNotFound { id: String },

    #[error("invalid daily log for {user_id} on {date}: {reason}")]
    InvalidDailyLog {
        user_id: String,
        date: String,
        reason: String,
    },

    #[error("storage error: {0}")]
    StorageError(#[from] StorageError),

    #[error("config error: {0}")]
    ConfigError(#[from] ConfigError),

    #[error("catalog error: {0}")]
    CatalogError(#[from] CatalogError),

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Convenience alias used across the workspace.
pub type CadenceResult<T> = Result<T, CadenceError>;
