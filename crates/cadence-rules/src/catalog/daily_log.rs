//! Rules reacting to the log saved for the evaluation date.

use cadence_context::RuleContext;
use cadence_core::models::{DailyLog, LhTestResult, NotificationKind, Priority, Trigger};

use super::dates::{date_of_cycle_day, fmt_date};
use crate::rule::{Rule, RuleMessage};

const ON_SAVE: &[Trigger] = &[Trigger::DailyLogSave];

pub const SHORT_SLEEP_HOURS: f64 = 5.0;
pub const HIGH_STRESS: u8 = 4;
pub const LOW_WATER_GLASSES: u32 = 4;
pub const LOW_VEGGIE_SERVINGS: u32 = 3;
pub const MANY_SYMPTOMS: usize = 3;
pub const STREAK_MILESTONE: u32 = 7;

pub fn rules() -> Vec<Rule> {
    vec![
        Rule::new(
            "D-1",
            ON_SAVE,
            NotificationKind::Alert,
            Priority::Urgent,
            0,
            |ctx| today(ctx, |l| l.sleep_hours.is_some_and(|h| h < SHORT_SLEEP_HOURS)),
            |ctx| {
                let hours = ctx.todays_log().and_then(|l| l.sleep_hours).unwrap_or(0.0);
                RuleMessage::new(
                    "You slept very little",
                    format!(
                        "Only {hours:.1} hours of sleep last night. Short sleep disrupts the \
                         hormones that regulate ovulation; try to get to bed earlier tonight."
                    ),
                )
            },
        ),
        Rule::new(
            "D-2",
            ON_SAVE,
            NotificationKind::Tip,
            Priority::Normal,
            3,
            |ctx| today(ctx, |l| l.stress_level.is_some_and(|s| s >= HIGH_STRESS)),
            |_| {
                RuleMessage::new(
                    "A stressful day",
                    "High stress can delay ovulation. Ten minutes of breathing exercises or a \
                     short walk outside can help bring it down.",
                )
            },
        ),
        Rule::new(
            "D-3",
            ON_SAVE,
            NotificationKind::Alert,
            Priority::Urgent,
            1,
            |ctx| ctx.cycle.in_fertile_window() && today(ctx, |l| l.alcohol),
            |_| {
                RuleMessage::new(
                    "Alcohol in your fertile window",
                    "You logged alcohol during your fertile window. Avoiding it on these days \
                     gives a possible pregnancy the best start.",
                )
            },
        ),
        Rule::new(
            "D-4",
            ON_SAVE,
            NotificationKind::Opportunity,
            Priority::Urgent,
            1,
            |ctx| today(ctx, |l| l.lh_test == Some(LhTestResult::Positive)),
            |_| {
                RuleMessage::new(
                    "Positive ovulation test",
                    "Your LH surge has started: ovulation usually follows within 24 to 36 hours. \
                     Today and the next two days are your best chance to conceive.",
                )
            },
        ),
        Rule::new(
            "D-5",
            ON_SAVE,
            NotificationKind::Opportunity,
            Priority::Normal,
            1,
            |ctx| today(ctx, |l| l.cervical_mucus.is_some_and(|m| m.is_fertile())),
            |_| {
                RuleMessage::new(
                    "Fertile cervical mucus",
                    "Watery or egg-white mucus is one of the most reliable signs that ovulation \
                     is close.",
                )
            },
        ),
        Rule::new(
            "D-6",
            ON_SAVE,
            NotificationKind::Opportunity,
            Priority::Normal,
            1,
            |ctx| ctx.cycle.in_fertile_window(),
            in_window,
        ),
        Rule::new(
            "D-7",
            ON_SAVE,
            NotificationKind::Celebration,
            Priority::Normal,
            365,
            |ctx| ctx.adherence.total_logs == 1 && ctx.todays_log().is_some(),
            |_| {
                RuleMessage::new(
                    "Your first daily log",
                    "Great start! Logging every day lets us spot the patterns that matter for \
                     your fertility.",
                )
            },
        ),
        Rule::new(
            "D-8",
            ON_SAVE,
            NotificationKind::Celebration,
            Priority::Low,
            STREAK_MILESTONE,
            |ctx| {
                let streak = ctx.adherence.log_streak;
                ctx.todays_log().is_some() && streak > 0 && streak % STREAK_MILESTONE == 0
            },
            |ctx| {
                RuleMessage::new(
                    "Logging streak",
                    format!(
                        "{} days in a row. Consistent logs make every prediction better.",
                        ctx.adherence.log_streak
                    ),
                )
            },
        ),
        Rule::new(
            "D-9",
            ON_SAVE,
            NotificationKind::Tip,
            Priority::Low,
            3,
            |ctx| today(ctx, |l| l.water_glasses.is_some_and(|w| w < LOW_WATER_GLASSES)),
            |_| {
                RuleMessage::new(
                    "Drink a bit more water",
                    "Staying hydrated supports healthy cervical mucus. Aim for at least six to \
                     eight glasses a day.",
                )
            },
        ),
        Rule::new(
            "D-10",
            ON_SAVE,
            NotificationKind::Tip,
            Priority::Low,
            3,
            |ctx| today(ctx, |l| l.veggie_servings.is_some_and(|v| v < LOW_VEGGIE_SERVINGS)),
            |_| {
                RuleMessage::new(
                    "More vegetables",
                    "Leafy greens and colourful vegetables bring folate and antioxidants. Try \
                     adding one more serving tomorrow.",
                )
            },
        ),
        Rule::new(
            "D-11",
            ON_SAVE,
            NotificationKind::Insight,
            Priority::Normal,
            3,
            |ctx| today(ctx, |l| l.symptoms.len() >= MANY_SYMPTOMS),
            |ctx| {
                let list = ctx
                    .todays_log()
                    .map(|l| l.symptoms.join(", "))
                    .unwrap_or_default();
                RuleMessage::new(
                    "Several symptoms today",
                    format!(
                        "You logged {list}. If symptoms persist or worry you, share your log \
                         history with your doctor."
                    ),
                )
            },
        ),
    ]
}

/// Applies `check` to the log for the evaluation date, false without one.
fn today(ctx: &RuleContext, check: impl Fn(&DailyLog) -> bool) -> bool {
    ctx.todays_log().is_some_and(check)
}

fn in_window(ctx: &RuleContext) -> RuleMessage {
    let window = ctx.cycle.fertile_window;
    let ovulation = date_of_cycle_day(ctx, window.ovulation_day);
    RuleMessage::new(
        "You're in your fertile window",
        format!(
            "Cycle day {}: estimated ovulation on {}. Today's chance of conception is about {:.0}%.",
            ctx.cycle.cycle_day,
            fmt_date(ovulation),
            ctx.cycle.conception_probability
        ),
    )
}
