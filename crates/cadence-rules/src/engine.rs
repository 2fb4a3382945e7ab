//! RuleEngine: filter → condition → cooldown → collect.
//!
//! Every selected rule gets exactly one [`RuleOutcome`]. A rule whose
//! condition or message builder panics is recorded as `Errored` and its
//! siblings are still evaluated. Cooldown history that cannot be read
//! skips the rule (fail closed).

use std::any::Any;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

use cadence_context::RuleContext;
use cadence_core::models::{NotificationCandidate, NotificationMetadata, Trigger};
use cadence_core::traits::NotificationStore;
use cadence_observability::{evaluation_span, events};

use crate::catalog::RuleCatalog;
use crate::rule::{Rule, RuleMessage};

/// Why a selected rule produced no candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum SkipReason {
    ConditionFalse,
    /// Already fired within `cooldown_days`.
    Cooldown { last_fired_at: DateTime<Utc> },
    /// History unavailable; treated as in cooldown.
    CooldownLookupFailed { error: String },
}

impl SkipReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkipReason::ConditionFalse => "condition_false",
            SkipReason::Cooldown { .. } => "cooldown",
            SkipReason::CooldownLookupFailed { .. } => "cooldown_lookup_failed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum RuleOutcome {
    Fired,
    Skipped { reason: SkipReason },
    Errored { cause: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleReport {
    pub rule_id: String,
    pub outcome: RuleOutcome,
}

/// Per-rule outcomes of one pass, in catalog order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationReport {
    pub user_id: String,
    pub trigger: Trigger,
    pub evaluated_at: DateTime<Utc>,
    pub outcomes: Vec<RuleReport>,
}

impl EvaluationReport {
    pub fn outcome_for(&self, rule_id: &str) -> Option<&RuleOutcome> {
        self.outcomes
            .iter()
            .find(|r| r.rule_id == rule_id)
            .map(|r| &r.outcome)
    }

    pub fn fired(&self) -> impl Iterator<Item = &str> + '_ {
        self.outcomes
            .iter()
            .filter(|r| r.outcome == RuleOutcome::Fired)
            .map(|r| r.rule_id.as_str())
    }

    pub fn errored(&self) -> impl Iterator<Item = &RuleReport> + '_ {
        self.outcomes
            .iter()
            .filter(|r| matches!(r.outcome, RuleOutcome::Errored { .. }))
    }

    pub fn selected(&self) -> usize {
        self.outcomes.len()
    }
}

#[derive(Debug, Clone)]
pub struct Evaluation {
    /// Ascending by priority; catalog order within a priority.
    pub candidates: Vec<NotificationCandidate>,
    pub report: EvaluationReport,
}

/// Evaluates a [`RuleCatalog`] against contexts, consulting a store for cooldowns.
#[derive(Clone)]
pub struct RuleEngine {
    catalog: RuleCatalog,
    store: Arc<dyn NotificationStore>,
}

impl RuleEngine {
    pub fn new(catalog: RuleCatalog, store: Arc<dyn NotificationStore>) -> Self {
        Self { catalog, store }
    }

    pub fn catalog(&self) -> &RuleCatalog {
        &self.catalog
    }

    pub fn store(&self) -> &Arc<dyn NotificationStore> {
        &self.store
    }

    /// Run one pass. Never fails: every problem is recorded in the report.
    pub fn evaluate(&self, trigger: Trigger, ctx: &RuleContext) -> Evaluation {
        let span = evaluation_span!(ctx.user_id, trigger);
        let _guard = span.enter();

        let mut candidates = Vec::new();
        let mut outcomes = Vec::new();

        for rule in self.catalog.rules_for(trigger) {
            let outcome = match self.evaluate_rule(rule, ctx) {
                Ok(candidate) => {
                    events::rule_fired(&ctx.user_id, &rule.id, rule.priority.as_u8());
                    candidates.push(candidate);
                    RuleOutcome::Fired
                }
                Err(outcome) => {
                    match &outcome {
                        RuleOutcome::Skipped { reason } => {
                            events::rule_skipped(&ctx.user_id, &rule.id, reason.as_str())
                        }
                        RuleOutcome::Errored { cause } => {
                            events::rule_errored(&ctx.user_id, &rule.id, cause)
                        }
                        RuleOutcome::Fired => {}
                    }
                    outcome
                }
            };
            outcomes.push(RuleReport {
                rule_id: rule.id.clone(),
                outcome,
            });
        }

        // Stable: equal priorities keep catalog order.
        candidates.sort_by_key(|c| c.priority);

        events::evaluation_completed(
            &ctx.user_id,
            trigger.as_str(),
            outcomes.len(),
            candidates.len(),
        );

        Evaluation {
            candidates,
            report: EvaluationReport {
                user_id: ctx.user_id.clone(),
                trigger,
                evaluated_at: ctx.evaluated_at,
                outcomes,
            },
        }
    }

    /// `Ok` with the candidate if the rule fires, otherwise the non-fired outcome.
    fn evaluate_rule(
        &self,
        rule: &Rule,
        ctx: &RuleContext,
    ) -> Result<NotificationCandidate, RuleOutcome> {
        let holds = catch_unwind(AssertUnwindSafe(|| (rule.condition)(ctx))).map_err(|panic| {
            RuleOutcome::Errored {
                cause: format!("condition panicked: {}", panic_message(panic.as_ref())),
            }
        })?;
        if !holds {
            return Err(RuleOutcome::Skipped {
                reason: SkipReason::ConditionFalse,
            });
        }

        if rule.cooldown_days > 0 {
            let since = ctx.evaluated_at - Duration::days(i64::from(rule.cooldown_days));
            match self.store.find_since(&ctx.user_id, &rule.id, since) {
                Ok(None) => {}
                Ok(Some(previous)) => {
                    return Err(RuleOutcome::Skipped {
                        reason: SkipReason::Cooldown {
                            last_fired_at: previous.created_at,
                        },
                    });
                }
                Err(e) => {
                    let error = e.to_string();
                    events::cooldown_lookup_failed(&ctx.user_id, &rule.id, &error);
                    return Err(RuleOutcome::Skipped {
                        reason: SkipReason::CooldownLookupFailed { error },
                    });
                }
            }
        }

        let RuleMessage { title, message } = catch_unwind(AssertUnwindSafe(|| (rule.message)(ctx)))
            .map_err(|panic| RuleOutcome::Errored {
                cause: format!("message panicked: {}", panic_message(panic.as_ref())),
            })?;

        Ok(NotificationCandidate {
            user_id: ctx.user_id.clone(),
            title,
            message,
            kind: rule.kind,
            priority: rule.priority,
            metadata: NotificationMetadata {
                rule_id: rule.id.clone(),
            },
            cooldown_days: rule.cooldown_days,
        })
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    }
}
