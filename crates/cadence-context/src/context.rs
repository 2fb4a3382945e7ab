//! RuleContext: the only thing rule conditions and messages may read.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use cadence_core::models::{CycleRegularity, DailyLog, FormKind, PeriodicSummaries};
use cadence_cycle::CycleSnapshot;

use crate::adherence::Adherence;
use crate::window::WindowStats;

/// Profile fields rules care about, copied out of `UserProfile`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileFacts {
    pub cycle_regularity: CycleRegularity,
    pub consumes_alcohol: bool,
    pub smokes: bool,
    pub takes_supplements: bool,
    pub months_trying: Option<u32>,
    pub age: Option<u32>,
    pub created_at: DateTime<Utc>,
}

/// Latest submission time per consultation form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormStatus {
    submitted: BTreeMap<FormKind, DateTime<Utc>>,
}

impl FormStatus {
    pub(crate) fn record(&mut self, kind: FormKind, at: DateTime<Utc>) {
        let entry = self.submitted.entry(kind).or_insert(at);
        if at > *entry {
            *entry = at;
        }
    }

    pub fn is_submitted(&self, kind: FormKind) -> bool {
        self.submitted.contains_key(&kind)
    }

    pub fn submitted_at(&self, kind: FormKind) -> Option<DateTime<Utc>> {
        self.submitted.get(&kind).copied()
    }

    /// Forms not yet submitted, in F0..F3 order.
    pub fn pending(&self) -> Vec<FormKind> {
        FormKind::ALL
            .into_iter()
            .filter(|k| !self.is_submitted(*k))
            .collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningProgress {
    pub modules_total: u32,
    pub modules_completed: u32,
    /// `modules_completed / modules_total`, 0.0 without modules.
    pub completion_ratio: f64,
    pub last_lesson_completed_at: Option<DateTime<Utc>>,
    /// Title of the most recently completed module.
    pub last_completed_module: Option<String>,
}

impl LearningProgress {
    pub fn all_completed(&self) -> bool {
        self.modules_total > 0 && self.modules_completed >= self.modules_total
    }
}

/// Per-evaluation-pass snapshot. Built fresh for every trigger, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleContext {
    pub user_id: String,
    /// Calendar date the pass evaluates.
    pub as_of: NaiveDate,
    /// Wall-clock instant of the pass; cooldown windows are measured from here.
    pub evaluated_at: DateTime<Utc>,
    pub profile: ProfileFacts,
    pub cycle: CycleSnapshot,
    pub adherence: Adherence,
    pub last_3_days: WindowStats,
    pub last_7_days: WindowStats,
    pub last_14_days: WindowStats,
    /// Most recent valid log dated on or before `as_of`.
    pub latest_log: Option<DailyLog>,
    pub forms: FormStatus,
    pub learning: LearningProgress,
    pub summaries: PeriodicSummaries,
}

impl RuleContext {
    /// The latest log, but only if it is for `as_of`.
    pub fn todays_log(&self) -> Option<&DailyLog> {
        self.latest_log.as_ref().filter(|log| log.date == self.as_of)
    }

    /// Whole days since `at`, measured from `evaluated_at`.
    pub fn days_since(&self, at: DateTime<Utc>) -> i64 {
        (self.evaluated_at - at).num_days()
    }
}
