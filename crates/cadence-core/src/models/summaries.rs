use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// When the periodic AI summaries were last produced for a user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodicSummaries {
    pub last_weekly_summary_at: Option<DateTime<Utc>>,
    pub last_monthly_summary_at: Option<DateTime<Utc>>,
}
