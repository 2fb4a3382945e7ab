//! NotificationSink: per-user daily quota and persistence.
//!
//! `remaining = daily_limit - sent_today`, where `sent_today` counts rows
//! created since the start of the current UTC day. Candidates are inserted
//! in priority order while quota remains; the rest are dropped, never
//! queued. A failed count persists nothing.
//!
//! Each insert goes through `NotificationStore::insert_within_quota`, which
//! re-checks the count atomically, so concurrent passes for one user share
//! the same daily limit.

use std::sync::Arc;

use chrono::{DateTime, NaiveTime, Utc};
use serde::Serialize;

use cadence_core::config::NotificationConfig;
use cadence_core::models::{InsertOutcome, NotificationCandidate};
use cadence_core::traits::NotificationStore;
use cadence_observability::{delivery_span, events};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DropReason {
    QuotaExhausted,
    /// The quota count failed; nothing is persisted this pass.
    QuotaUnavailable,
    /// Candidate addressed to a different user than the delivery.
    ForeignUser,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DeliveryStatus {
    Persisted { id: String },
    /// Another pass already stored this rule in the current cooldown bucket.
    /// Does not consume quota.
    AlreadyFired,
    /// Insert error. Consumes the quota slot.
    Failed { error: String },
    Dropped { reason: DropReason },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryRecord {
    pub rule_id: String,
    pub status: DeliveryStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryReport {
    pub user_id: String,
    /// Rows already counted today, `None` if the count failed.
    pub sent_today: Option<usize>,
    /// Quota left when the pass started.
    pub remaining_before: u32,
    /// One record per candidate, in insertion-attempt order.
    pub records: Vec<DeliveryRecord>,
}

impl DeliveryReport {
    pub fn persisted(&self) -> impl Iterator<Item = &DeliveryRecord> + '_ {
        self.records
            .iter()
            .filter(|r| matches!(r.status, DeliveryStatus::Persisted { .. }))
    }

    pub fn persisted_count(&self) -> usize {
        self.persisted().count()
    }

    pub fn dropped_count(&self) -> usize {
        self.records
            .iter()
            .filter(|r| matches!(r.status, DeliveryStatus::Dropped { .. }))
            .count()
    }

    pub fn status_for(&self, rule_id: &str) -> Option<&DeliveryStatus> {
        self.records
            .iter()
            .find(|r| r.rule_id == rule_id)
            .map(|r| &r.status)
    }
}

#[derive(Clone)]
pub struct NotificationSink {
    store: Arc<dyn NotificationStore>,
    daily_limit: u32,
}

impl NotificationSink {
    pub fn new(store: Arc<dyn NotificationStore>, config: &NotificationConfig) -> Self {
        Self::with_limit(store, config.daily_limit)
    }

    pub fn with_limit(store: Arc<dyn NotificationStore>, daily_limit: u32) -> Self {
        Self { store, daily_limit }
    }

    pub fn daily_limit(&self) -> u32 {
        self.daily_limit
    }

    /// Persist the accepted prefix of `candidates`. Never fails; every
    /// candidate's fate is in the returned report.
    pub fn deliver(
        &self,
        user_id: &str,
        mut candidates: Vec<NotificationCandidate>,
        now: DateTime<Utc>,
    ) -> DeliveryReport {
        let span = delivery_span!(user_id, candidates.len());
        let _guard = span.enter();

        candidates.sort_by_key(|c| c.priority);

        let day_start = now.date_naive().and_time(NaiveTime::MIN).and_utc();
        let sent_today = match self.store.count_since(user_id, day_start) {
            Ok(n) => Some(n),
            Err(e) => {
                events::quota_count_failed(user_id, &e.to_string());
                None
            }
        };
        let remaining_before = sent_today
            .map(|n| self.daily_limit.saturating_sub(u32::try_from(n).unwrap_or(u32::MAX)))
            .unwrap_or(0);

        let mut remaining = remaining_before;
        let mut records = Vec::with_capacity(candidates.len());
        for candidate in candidates {
            let rule_id = candidate.rule_id().to_string();
            let status = if candidate.user_id != user_id {
                DeliveryStatus::Dropped {
                    reason: DropReason::ForeignUser,
                }
            } else if sent_today.is_none() {
                DeliveryStatus::Dropped {
                    reason: DropReason::QuotaUnavailable,
                }
            } else if remaining == 0 {
                DeliveryStatus::Dropped {
                    reason: DropReason::QuotaExhausted,
                }
            } else {
                match self.store.insert_within_quota(
                    &candidate.into_new(now),
                    day_start,
                    self.daily_limit,
                ) {
                    Ok(InsertOutcome::Inserted { id }) => {
                        remaining -= 1;
                        events::notification_persisted(user_id, &rule_id, &id);
                        DeliveryStatus::Persisted { id }
                    }
                    Ok(InsertOutcome::Duplicate) => {
                        events::notification_already_fired(user_id, &rule_id);
                        DeliveryStatus::AlreadyFired
                    }
                    Ok(InsertOutcome::QuotaExhausted) => {
                        // A concurrent pass used the rest of today's quota.
                        remaining = 0;
                        DeliveryStatus::Dropped {
                            reason: DropReason::QuotaExhausted,
                        }
                    }
                    Err(e) => {
                        remaining -= 1;
                        let error = e.to_string();
                        events::notification_insert_failed(user_id, &rule_id, &error);
                        DeliveryStatus::Failed { error }
                    }
                }
            };
            records.push(DeliveryRecord { rule_id, status });
        }

        let report = DeliveryReport {
            user_id: user_id.to_string(),
            sent_today,
            remaining_before,
            records,
        };
        events::delivery_completed(
            user_id,
            report.persisted_count(),
            report.dropped_count(),
            remaining,
        );
        report
    }
}
