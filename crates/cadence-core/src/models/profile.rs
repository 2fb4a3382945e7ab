use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Self-reported cycle regularity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CycleRegularity {
    Regular,
    Irregular,
    #[default]
    Unknown,
}

/// Profile data captured by the F0 form and edited afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub user_id: String,
    /// Self-reported cycle length in days. Only `1..=100` is treated as measured.
    pub cycle_length: Option<u32>,
    pub last_period_date: Option<NaiveDate>,
    #[serde(default)]
    pub cycle_regularity: CycleRegularity,
    #[serde(default)]
    pub consumes_alcohol: bool,
    #[serde(default)]
    pub smokes: bool,
    #[serde(default)]
    pub takes_supplements: bool,
    /// How long the user has been trying to conceive.
    pub months_trying: Option<u32>,
    pub age: Option<u32>,
    pub created_at: DateTime<Utc>,
}

impl UserProfile {
    /// A bare profile with nothing but an id, as created before F0 is filled in.
    pub fn new(user_id: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            user_id: user_id.into(),
            cycle_length: None,
            last_period_date: None,
            cycle_regularity: CycleRegularity::Unknown,
            consumes_alcohol: false,
            smokes: false,
            takes_supplements: false,
            months_trying: None,
            age: None,
            created_at,
        }
    }
}
