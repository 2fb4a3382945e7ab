//! Rules over trailing 3, 7 and 14-day aggregates. Evaluated on log save and
//! on the daily scheduled pass; cooldowns keep them to one firing per window.

use cadence_core::models::{NotificationKind, Priority, Trigger};

use crate::rule::{Rule, RuleMessage};

const WINDOWED: &[Trigger] = &[Trigger::DailyLogSave, Trigger::DailyCheck];

/// Minimum logged days before a 7-day average is trusted.
const WEEK_MIN_LOGS: u32 = 5;
/// Minimum logged days before a 14-day average is trusted.
const FORTNIGHT_MIN_LOGS: u32 = 7;

pub fn rules() -> Vec<Rule> {
    vec![
        Rule::new(
            "W3-1",
            WINDOWED,
            NotificationKind::Alert,
            Priority::Urgent,
            3,
            |ctx| {
                ctx.last_3_days.is_complete()
                    && ctx.last_3_days.avg_sleep_hours.is_some_and(|h| h < 6.0)
            },
            |ctx| {
                RuleMessage::new(
                    "Three short nights",
                    format!(
                        "You've averaged {:.1} hours of sleep over the last three days. Sleep \
                         debt affects cycle hormones; protect your bedtime this week.",
                        ctx.last_3_days.avg_sleep_hours.unwrap_or(0.0)
                    ),
                )
            },
        ),
        Rule::new(
            "W3-2",
            WINDOWED,
            NotificationKind::Alert,
            Priority::Normal,
            3,
            |ctx| {
                ctx.last_3_days.is_complete() && ctx.last_3_days.avg_stress.is_some_and(|s| s >= 4.0)
            },
            |_| {
                RuleMessage::new(
                    "Stress has been high",
                    "Your stress has stayed high for three days. Consider talking with someone \
                     you trust or trying a guided relaxation session.",
                )
            },
        ),
        Rule::new(
            "W7-1",
            WINDOWED,
            NotificationKind::Alert,
            Priority::Normal,
            7,
            |ctx| ctx.last_7_days.alcohol_days >= 3,
            |ctx| {
                RuleMessage::new(
                    "Alcohol this week",
                    format!(
                        "You logged alcohol on {} of the last 7 days. Cutting back helps both \
                         egg quality and sleep.",
                        ctx.last_7_days.alcohol_days
                    ),
                )
            },
        ),
        Rule::new(
            "W7-2",
            WINDOWED,
            NotificationKind::Tip,
            Priority::Low,
            7,
            |ctx| {
                ctx.last_7_days.days_logged >= WEEK_MIN_LOGS
                    && ctx.last_7_days.avg_activity_minutes.is_some_and(|m| m < 20.0)
            },
            |_| {
                RuleMessage::new(
                    "Move a little more",
                    "Moderate activity most days improves insulin sensitivity and ovulation. A \
                     30-minute walk counts.",
                )
            },
        ),
        Rule::new(
            "W7-3",
            WINDOWED,
            NotificationKind::Tip,
            Priority::Low,
            7,
            |ctx| {
                ctx.last_7_days.days_logged >= WEEK_MIN_LOGS
                    && ctx.last_7_days.avg_sun_minutes.is_some_and(|m| m < 15.0)
            },
            |_| {
                RuleMessage::new(
                    "Get some daylight",
                    "A little sun each day helps vitamin D and your sleep rhythm. Fifteen \
                     minutes outdoors is enough.",
                )
            },
        ),
        Rule::new(
            "W7-4",
            WINDOWED,
            NotificationKind::Celebration,
            Priority::Low,
            7,
            |ctx| {
                let week = &ctx.last_7_days;
                week.days_logged >= WEEK_MIN_LOGS
                    && week.avg_sleep_hours.is_some_and(|h| h >= 7.0)
                    && week.avg_stress.is_some_and(|s| s <= 2.0)
                    && week.alcohol_days == 0
            },
            |_| {
                RuleMessage::new(
                    "A great week",
                    "Good sleep, low stress and no alcohol all week. This is exactly the routine \
                     that supports conception.",
                )
            },
        ),
        Rule::new(
            "W14-1",
            WINDOWED,
            NotificationKind::Celebration,
            Priority::Normal,
            14,
            |ctx| ctx.last_14_days.is_complete(),
            |_| {
                RuleMessage::new(
                    "Two weeks of complete logs",
                    "You've logged every day for two weeks. Your weekly summary now has enough \
                     data to show real trends.",
                )
            },
        ),
        Rule::new(
            "W14-2",
            WINDOWED,
            NotificationKind::Insight,
            Priority::Normal,
            14,
            |ctx| {
                ctx.last_14_days.days_logged >= FORTNIGHT_MIN_LOGS
                    && ctx.last_14_days.avg_sleep_quality.is_some_and(|q| q <= 2.0)
            },
            |_| {
                RuleMessage::new(
                    "Poor sleep quality",
                    "Your sleep quality has been low for two weeks. Keeping a regular schedule \
                     and a dark, cool bedroom can help; mention it at your next consultation.",
                )
            },
        ),
    ]
}
