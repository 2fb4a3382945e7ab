use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::SECONDS_PER_DAY;

/// Notification category, used by the UI for styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Alert,
    Insight,
    Celebration,
    Tip,
    Opportunity,
}

impl NotificationKind {
    pub fn as_str(self) -> &'static str {
        match self {
            NotificationKind::Alert => "alert",
            NotificationKind::Insight => "insight",
            NotificationKind::Celebration => "celebration",
            NotificationKind::Tip => "tip",
            NotificationKind::Opportunity => "opportunity",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "alert" => Some(NotificationKind::Alert),
            "insight" => Some(NotificationKind::Insight),
            "celebration" => Some(NotificationKind::Celebration),
            "tip" => Some(NotificationKind::Tip),
            "opportunity" => Some(NotificationKind::Opportunity),
            _ => None,
        }
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Urgency. Ordered so that sorting ascending puts `Urgent` first.
/// Serialized as the integers 1..=3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Priority {
    Urgent = 1,
    Normal = 2,
    Low = 3,
}

impl Priority {
    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

impl From<Priority> for u8 {
    fn from(p: Priority) -> Self {
        p.as_u8()
    }
}

impl TryFrom<u8> for Priority {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Priority::Urgent),
            2 => Ok(Priority::Normal),
            3 => Ok(Priority::Low),
            other => Err(format!("priority must be 1..=3, got {other}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationMetadata {
    pub rule_id: String,
}

/// A rule that fired and passed cooldown. This is the engine's output contract:
/// no id and no timestamp, both are assigned on persistence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationCandidate {
    pub user_id: String,
    pub title: String,
    pub message: String,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub priority: Priority,
    pub metadata: NotificationMetadata,
    /// Carried so the store can compute the cooldown bucket.
    #[serde(skip)]
    pub cooldown_days: u32,
}

impl NotificationCandidate {
    pub fn rule_id(&self) -> &str {
        &self.metadata.rule_id
    }

    /// Stamp the candidate for insertion at `created_at`.
    pub fn into_new(self, created_at: DateTime<Utc>) -> NewNotification {
        let bucket = cooldown_bucket(created_at, self.cooldown_days);
        NewNotification {
            user_id: self.user_id,
            title: self.title,
            message: self.message,
            kind: self.kind,
            priority: self.priority,
            metadata: self.metadata,
            created_at,
            cooldown_bucket: bucket,
        }
    }
}

/// A notification ready to be inserted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewNotification {
    pub user_id: String,
    pub title: String,
    pub message: String,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub priority: Priority,
    pub metadata: NotificationMetadata,
    pub created_at: DateTime<Utc>,
    pub cooldown_bucket: Option<i64>,
}

/// A persisted notification. Immutable apart from `is_read` and `deleted_at`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub message: String,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub priority: Priority,
    pub metadata: NotificationMetadata,
    pub created_at: DateTime<Utc>,
    pub is_read: bool,
    pub cooldown_bucket: Option<i64>,
    pub deleted_at: Option<DateTime<Utc>>,
}

/// Result of a store insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InsertOutcome {
    /// Row written; carries the assigned id.
    Inserted { id: String },
    /// Another writer already recorded this rule for this cooldown bucket.
    Duplicate,
    /// The user's daily quota was already used up; nothing written.
    QuotaExhausted,
}

/// Cooldown bucket for a notification created at `created_at`.
///
/// `floor(days_since_epoch / cooldown_days)`. Two firings at least
/// `cooldown_days` apart always land in different buckets; `None` for
/// `cooldown_days == 0` (no uniqueness).
pub fn cooldown_bucket(created_at: DateTime<Utc>, cooldown_days: u32) -> Option<i64> {
    if cooldown_days == 0 {
        return None;
    }
    let epoch_day = created_at.timestamp().div_euclid(SECONDS_PER_DAY);
    Some(epoch_day.div_euclid(i64::from(cooldown_days)))
}
