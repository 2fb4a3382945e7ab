//! The `Rule` record.

use std::fmt;

use cadence_context::RuleContext;
use cadence_core::models::{NotificationKind, Priority, Trigger};

/// Pure predicate over the context. Must not perform I/O.
pub type Condition = fn(&RuleContext) -> bool;

/// Pure message builder over the context.
pub type MessageBuilder = fn(&RuleContext) -> RuleMessage;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleMessage {
    pub title: String,
    pub message: String,
}

impl RuleMessage {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }
}

/// One declarative notification rule.
#[derive(Clone)]
pub struct Rule {
    /// Stable, globally unique. Persisted as `metadata.ruleId`.
    pub id: String,
    pub triggers: Vec<Trigger>,
    pub kind: NotificationKind,
    pub priority: Priority,
    /// Minimum days between firings for one user. 0 refires on every pass.
    pub cooldown_days: u32,
    pub condition: Condition,
    pub message: MessageBuilder,
}

impl Rule {
    pub fn new(
        id: impl Into<String>,
        triggers: &[Trigger],
        kind: NotificationKind,
        priority: Priority,
        cooldown_days: u32,
        condition: Condition,
        message: MessageBuilder,
    ) -> Self {
        Self {
            id: id.into(),
            triggers: triggers.to_vec(),
            kind,
            priority,
            cooldown_days,
            condition,
            message,
        }
    }

    pub fn applies_to(&self, trigger: Trigger) -> bool {
        self.triggers.contains(&trigger)
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("id", &self.id)
            .field("triggers", &self.triggers)
            .field("kind", &self.kind)
            .field("priority", &self.priority)
            .field("cooldown_days", &self.cooldown_days)
            .finish_non_exhaustive()
    }
}
