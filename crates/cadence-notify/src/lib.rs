//! # cadence-notify
//!
//! The last stage of a trigger pass. [`NotificationSink`] applies the
//! per-user daily quota and persists the accepted candidates;
//! [`NotificationPipeline`] wires context building, rule evaluation and
//! delivery into the single call a trigger handler makes.

pub mod pipeline;
pub mod sink;

pub use pipeline::{NotificationPipeline, PipelineOutcome};
pub use sink::{DeliveryRecord, DeliveryReport, DeliveryStatus, DropReason, NotificationSink};
