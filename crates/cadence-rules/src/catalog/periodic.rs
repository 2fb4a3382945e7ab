//! Rules for the once-daily scheduled pass: reminders, upcoming cycle
//! events, summaries and pending follow-ups.

use chrono::{DateTime, Duration, Utc};

use cadence_context::RuleContext;
use cadence_core::models::{FormKind, NotificationKind, Priority, Trigger};

use super::dates::{estimate_note, fmt_date, upcoming_fertile_window};
use crate::rule::{Rule, RuleMessage};

const DAILY: &[Trigger] = &[Trigger::DailyCheck];

const INACTIVE_DAYS: u32 = 3;
const WEEKLY_SUMMARY_DAYS: i64 = 7;
const MONTHLY_SUMMARY_DAYS: i64 = 30;
const LEARNING_STALL_DAYS: i64 = 7;
const FORM_GRACE_DAYS: i64 = 3;

pub fn rules() -> Vec<Rule> {
    vec![
        Rule::new(
            "P-1",
            DAILY,
            NotificationKind::Tip,
            Priority::Low,
            1,
            |ctx| {
                ctx.adherence
                    .days_since_last_log
                    .is_some_and(|d| (1..INACTIVE_DAYS).contains(&d))
            },
            |_| {
                RuleMessage::new(
                    "Log today",
                    "You haven't logged today yet. It only takes a minute.",
                )
            },
        ),
        Rule::new(
            "P-2",
            DAILY,
            NotificationKind::Alert,
            Priority::Normal,
            3,
            inactive,
            |ctx| {
                let body = match ctx.adherence.days_since_last_log {
                    Some(days) => format!(
                        "It's been {days} days since your last log. Picking it back up keeps \
                         your predictions accurate."
                    ),
                    None => "You haven't logged a day yet. Start today to unlock your trends."
                        .to_string(),
                };
                RuleMessage::new("We miss your logs", body)
            },
        ),
        Rule::new(
            "P-3",
            DAILY,
            NotificationKind::Opportunity,
            Priority::Urgent,
            14,
            |ctx| ctx.cycle.days_until_fertile_window().is_some_and(|d| d <= 2),
            |ctx| {
                let (start, end) = upcoming_fertile_window(ctx);
                RuleMessage::new(
                    "Fertile window coming up",
                    format!(
                        "Your fertile window opens on {} and lasts until {}.{}",
                        fmt_date(start),
                        fmt_date(end),
                        estimate_note(ctx)
                    ),
                )
            },
        ),
        Rule::new(
            "P-4",
            DAILY,
            NotificationKind::Opportunity,
            Priority::Urgent,
            14,
            |ctx| ctx.cycle.cycle_day == ctx.cycle.fertile_window.start,
            |ctx| {
                RuleMessage::new(
                    "Your fertile window starts today",
                    format!(
                        "The next {} days are your most fertile of this cycle.{}",
                        ctx.cycle.fertile_window.length_days(),
                        estimate_note(ctx)
                    ),
                )
            },
        ),
        Rule::new(
            "P-5",
            DAILY,
            NotificationKind::Insight,
            Priority::Normal,
            14,
            |ctx| {
                !ctx.cycle.using_default && (1..=2).contains(&ctx.cycle.next_period.days_until)
            },
            |ctx| {
                RuleMessage::new(
                    "Period expected soon",
                    format!(
                        "Your next period is expected around {}. Log its first day so we can \
                         keep your cycle accurate.",
                        fmt_date(ctx.cycle.next_period.date)
                    ),
                )
            },
        ),
        Rule::new(
            "P-6",
            DAILY,
            NotificationKind::Insight,
            Priority::Low,
            WEEKLY_SUMMARY_DAYS as u32,
            |ctx| {
                ctx.last_7_days.days_logged >= 3
                    && summary_due(ctx, ctx.summaries.last_weekly_summary_at, WEEKLY_SUMMARY_DAYS)
            },
            |_| {
                RuleMessage::new(
                    "Your weekly summary is ready",
                    "See how your sleep, stress and habits shaped this week.",
                )
            },
        ),
        Rule::new(
            "P-7",
            DAILY,
            NotificationKind::Insight,
            Priority::Low,
            MONTHLY_SUMMARY_DAYS as u32,
            |ctx| {
                ctx.adherence.total_logs >= 14
                    && summary_due(ctx, ctx.summaries.last_monthly_summary_at, MONTHLY_SUMMARY_DAYS)
            },
            |_| {
                RuleMessage::new(
                    "Your monthly report is ready",
                    "A month of data: review your cycle and lifestyle trends.",
                )
            },
        ),
        Rule::new(
            "P-8",
            DAILY,
            NotificationKind::Tip,
            Priority::Normal,
            7,
            next_form_due,
            |ctx| {
                let (title, body) = match ctx.forms.pending().first() {
                    Some(FormKind::F1) => (
                        "Tell us about your history",
                        "The hormonal and gynecological history form helps your specialist \
                         understand your starting point.",
                    ),
                    Some(FormKind::F2) => (
                        "Lifestyle questionnaire",
                        "A few questions about your habits help us personalise your tips.",
                    ),
                    _ => (
                        "Upload your lab results",
                        "Add your latest lab exams so your specialist can review them.",
                    ),
                };
                RuleMessage::new(title, body)
            },
        ),
        Rule::new(
            "P-9",
            DAILY,
            NotificationKind::Tip,
            Priority::Low,
            7,
            learning_stalled,
            |ctx| {
                RuleMessage::new(
                    "Continue your course",
                    format!(
                        "You've completed {} of {} modules. Pick up where you left off.",
                        ctx.learning.modules_completed, ctx.learning.modules_total
                    ),
                )
            },
        ),
    ]
}

fn inactive(ctx: &RuleContext) -> bool {
    match ctx.adherence.days_since_last_log {
        Some(days) => days >= INACTIVE_DAYS,
        None => ctx.days_since(ctx.profile.created_at) >= i64::from(INACTIVE_DAYS),
    }
}

fn summary_due(ctx: &RuleContext, last: Option<DateTime<Utc>>, every_days: i64) -> bool {
    last.map_or(true, |at| ctx.days_since(at) >= every_days)
}

/// F0 is in and a later form is still missing a few days after it.
fn next_form_due(ctx: &RuleContext) -> bool {
    let Some(f0_at) = ctx.forms.submitted_at(FormKind::F0) else {
        return false;
    };
    !ctx.forms.pending().is_empty() && ctx.evaluated_at - f0_at >= Duration::days(FORM_GRACE_DAYS)
}

fn learning_stalled(ctx: &RuleContext) -> bool {
    let learning = &ctx.learning;
    if learning.modules_total == 0 || learning.all_completed() {
        return false;
    }
    let since = learning
        .last_lesson_completed_at
        .unwrap_or(ctx.profile.created_at);
    ctx.days_since(since) >= LEARNING_STALL_DAYS
}
