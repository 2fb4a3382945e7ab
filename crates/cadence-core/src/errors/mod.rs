//! Error handling for Cadence.
//! One error enum per subsystem, `thiserror` only.

pub mod cadence_error;
pub mod catalog_error;
pub mod config_error;
pub mod storage_error;

pub use cadence_error::{CadenceError, CadenceResult};
pub use catalog_error::CatalogError;
pub use config_error::ConfigError;
pub use storage_error::StorageError;
