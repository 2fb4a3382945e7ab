//! # cadence-core
//!
//! Foundation crate for the Cadence notification engine.
//! Defines the data model, the notification-store trait, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::CadenceConfig;
pub use errors::{CadenceError, CadenceResult};
pub use models::{
    DailyLog, FormKind, Notification, NotificationCandidate, NotificationKind, Priority, Trigger,
    UserProfile,
};
pub use traits::NotificationStore;
