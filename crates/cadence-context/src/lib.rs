//! # cadence-context
//!
//! Read-only aggregation of a user's profile, daily logs, consultation forms
//! and course progress into a [`RuleContext`] snapshot. One snapshot per
//! trigger invocation; nothing here mutates its inputs.

pub mod adherence;
pub mod builder;
pub mod context;
pub mod window;

pub use adherence::Adherence;
pub use builder::{ContextBuilder, ContextInputs};
pub use context::{FormStatus, LearningProgress, ProfileFacts, RuleContext};
pub use window::WindowStats;
