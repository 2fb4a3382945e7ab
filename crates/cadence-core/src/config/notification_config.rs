use serde::{Deserialize, Serialize};

use super::defaults;

/// Notification delivery configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationConfig {
    /// Maximum notifications persisted per user per UTC calendar day.
    pub daily_limit: u32,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            daily_limit: defaults::DEFAULT_DAILY_NOTIFICATION_LIMIT,
        }
    }
}
