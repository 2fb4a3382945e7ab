use std::fmt;

use serde::{Deserialize, Serialize};

/// The named event that starts a rule-evaluation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Trigger {
    /// First completion of the F0 profile form.
    #[serde(rename = "F0_CREATE")]
    F0Create,
    /// F0 profile edited.
    #[serde(rename = "F0_UPDATE")]
    F0Update,
    /// A daily log was upserted.
    #[serde(rename = "DAILY_LOG_SAVE")]
    DailyLogSave,
    /// Once-daily scheduled pass.
    #[serde(rename = "DAILY_CHECK", alias = "PERIODIC")]
    DailyCheck,
    #[serde(rename = "LESSON_COMPLETED")]
    LessonCompleted,
    /// Any consultation form other than F0 submitted.
    #[serde(rename = "FORM_SUBMITTED")]
    FormSubmitted,
}

impl Trigger {
    pub fn as_str(self) -> &'static str {
        match self {
            Trigger::F0Create => "F0_CREATE",
            Trigger::F0Update => "F0_UPDATE",
            Trigger::DailyLogSave => "DAILY_LOG_SAVE",
            Trigger::DailyCheck => "DAILY_CHECK",
            Trigger::LessonCompleted => "LESSON_COMPLETED",
            Trigger::FormSubmitted => "FORM_SUBMITTED",
        }
    }
}

impl fmt::Display for Trigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
