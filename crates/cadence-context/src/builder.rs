//! ContextBuilder: assembles a [`RuleContext`] from raw user data.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, NaiveDate, Utc};
use tracing::debug;

use cadence_core::config::CycleConfig;
use cadence_core::constants::{FORTNIGHT_WINDOW_DAYS, SHORT_WINDOW_DAYS, WEEK_WINDOW_DAYS};
use cadence_core::models::{
    ConsultationForm, CourseModule, DailyLog, PeriodicSummaries, UserProfile,
};
use cadence_cycle::CycleClock;

use crate::adherence::Adherence;
use crate::context::{FormStatus, LearningProgress, ProfileFacts, RuleContext};
use crate::window;

/// Borrowed inputs for one build. Nothing is copied until `build`.
#[derive(Debug, Clone)]
pub struct ContextInputs<'a> {
    pub profile: &'a UserProfile,
    pub logs: &'a [DailyLog],
    pub forms: &'a [ConsultationForm],
    pub modules: &'a [CourseModule],
    pub summaries: Option<&'a PeriodicSummaries>,
    pub now: DateTime<Utc>,
    /// Calendar date to evaluate; `now`'s UTC date when unset.
    pub as_of: Option<NaiveDate>,
}

impl<'a> ContextInputs<'a> {
    pub fn new(profile: &'a UserProfile, now: DateTime<Utc>) -> Self {
        Self {
            profile,
            logs: &[],
            forms: &[],
            modules: &[],
            summaries: None,
            now,
            as_of: None,
        }
    }

    pub fn with_logs(mut self, logs: &'a [DailyLog]) -> Self {
        self.logs = logs;
        self
    }

    pub fn with_forms(mut self, forms: &'a [ConsultationForm]) -> Self {
        self.forms = forms;
        self
    }

    pub fn with_modules(mut self, modules: &'a [CourseModule]) -> Self {
        self.modules = modules;
        self
    }

    pub fn with_summaries(mut self, summaries: &'a PeriodicSummaries) -> Self {
        self.summaries = Some(summaries);
        self
    }

    /// Evaluate a user-local calendar date instead of `now`'s UTC date.
    pub fn on(mut self, as_of: NaiveDate) -> Self {
        self.as_of = Some(as_of);
        self
    }
}

/// Builds rule contexts with a configured [`CycleClock`].
#[derive(Debug, Clone, Default)]
pub struct ContextBuilder {
    clock: CycleClock,
}

impl ContextBuilder {
    pub fn new(config: &CycleConfig) -> Self {
        Self {
            clock: CycleClock::new(config),
        }
    }

    pub fn with_clock(clock: CycleClock) -> Self {
        Self { clock }
    }

    pub fn clock(&self) -> &CycleClock {
        &self.clock
    }

    pub fn build(&self, inputs: &ContextInputs<'_>) -> RuleContext {
        let profile = inputs.profile;
        let as_of = inputs.as_of.unwrap_or_else(|| inputs.now.date_naive());

        let logs = usable_logs(profile, inputs.logs, as_of);
        let dates: BTreeSet<NaiveDate> = logs.keys().copied().collect();

        RuleContext {
            user_id: profile.user_id.clone(),
            as_of,
            evaluated_at: inputs.now,
            profile: ProfileFacts {
                cycle_regularity: profile.cycle_regularity,
                consumes_alcohol: profile.consumes_alcohol,
                smokes: profile.smokes,
                takes_supplements: profile.takes_supplements,
                months_trying: profile.months_trying,
                age: profile.age,
                created_at: profile.created_at,
            },
            cycle: self.clock.snapshot(profile, as_of),
            adherence: Adherence::compute(&dates, as_of),
            last_3_days: window::aggregate(logs.values().copied(), as_of, SHORT_WINDOW_DAYS),
            last_7_days: window::aggregate(logs.values().copied(), as_of, WEEK_WINDOW_DAYS),
            last_14_days: window::aggregate(logs.values().copied(), as_of, FORTNIGHT_WINDOW_DAYS),
            latest_log: logs.values().next_back().map(|log| (*log).clone()),
            forms: form_status(profile, inputs.forms),
            learning: learning_progress(inputs.modules),
            summaries: inputs.summaries.cloned().unwrap_or_default(),
        }
    }
}

/// One log per date (the last one supplied for a date wins, matching upsert
/// semantics), restricted to this user, dated on or before `as_of`, and valid.
/// Validation runs after the upsert: if the winning log is invalid the date
/// has no log at all, even when an earlier entry for it was valid.
fn usable_logs<'a>(
    profile: &UserProfile,
    logs: &'a [DailyLog],
    as_of: NaiveDate,
) -> BTreeMap<NaiveDate, &'a DailyLog> {
    let mut by_date: BTreeMap<NaiveDate, &DailyLog> = BTreeMap::new();
    for log in logs {
        if log.user_id != profile.user_id {
            debug!(user_id = %profile.user_id, log_user = %log.user_id, "ignoring log for another user");
            continue;
        }
        if log.date > as_of {
            continue;
        }
        by_date.insert(log.date, log);
    }
    by_date.retain(|date, log| match log.validate() {
        Ok(()) => true,
        Err(e) => {
            debug!(user_id = %profile.user_id, %date, error = %e, "dropping invalid daily log");
            false
        }
    });
    by_date
}

fn form_status(profile: &UserProfile, forms: &[ConsultationForm]) -> FormStatus {
    let mut status = FormStatus::default();
    for form in forms.iter().filter(|f| f.user_id == profile.user_id) {
        status.record(form.kind, form.submitted_at);
    }
    status
}

fn learning_progress(modules: &[CourseModule]) -> LearningProgress {
    let modules_total = modules.len() as u32;
    let completed: Vec<&CourseModule> = modules.iter().filter(|m| m.is_completed()).collect();
    let modules_completed = completed.len() as u32;
    let completion_ratio = if modules_total == 0 {
        0.0
    } else {
        f64::from(modules_completed) / f64::from(modules_total)
    };
    let last_lesson_completed_at = modules
        .iter()
        .filter_map(|m| m.last_lesson_completed_at.or(m.completed_at))
        .max();
    let last_completed_module = completed
        .iter()
        .filter_map(|m| m.completed_at.map(|at| (at, m.title.clone())))
        .max_by_key(|(at, _)| *at)
        .map(|(_, title)| title);

    LearningProgress {
        modules_total,
        modules_completed,
        completion_ratio,
        last_lesson_completed_at,
        last_completed_module,
    }
}
