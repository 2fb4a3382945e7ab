use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Learning-path progress for one course module.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseModule {
    pub id: String,
    pub title: String,
    pub lessons_total: u32,
    pub lessons_completed: u32,
    /// Set once every lesson in the module is done.
    pub completed_at: Option<DateTime<Utc>>,
    /// Most recent lesson completion in this module.
    pub last_lesson_completed_at: Option<DateTime<Utc>>,
}

impl CourseModule {
    pub fn is_completed(&self) -> bool {
        self.completed_at.is_some()
            || (self.lessons_total > 0 && self.lessons_completed >= self.lessons_total)
    }
}
