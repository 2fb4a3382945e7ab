//! Data model shared by every Cadence crate.

mod course;
mod daily_log;
mod form;
mod notification;
mod profile;
mod summaries;
mod trigger;

pub use course::CourseModule;
pub use daily_log::{CervicalMucus, DailyLog, LhTestResult};
pub use form::{ConsultationForm, FormKind};
pub use notification::{
    cooldown_bucket, InsertOutcome, NewNotification, Notification, NotificationCandidate,
    NotificationKind, NotificationMetadata, Priority,
};
pub use profile::{CycleRegularity, UserProfile};
pub use summaries::PeriodicSummaries;
pub use trigger::Trigger;
