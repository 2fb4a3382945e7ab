//! # cadence-rules
//!
//! The rule catalog and the engine that evaluates it.
//!
//! A pass selects the rules registered for a trigger, evaluates each
//! condition in isolation, consults notification history for cooldowns,
//! and returns priority-ordered candidates together with a per-rule report.

pub mod catalog;
pub mod engine;
pub mod rule;

pub use catalog::RuleCatalog;
pub use engine::{Evaluation, EvaluationReport, RuleEngine, RuleOutcome, RuleReport, SkipReason};
pub use rule::{Condition, MessageBuilder, Rule, RuleMessage};
