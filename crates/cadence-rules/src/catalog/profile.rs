//! Rules evaluated when the F0 profile form is first completed or edited.

use cadence_context::RuleContext;
use cadence_core::models::{CycleRegularity, NotificationKind, Priority, Trigger};

use super::dates::{estimate_note, fmt_date, upcoming_fertile_window};
use crate::rule::{Rule, RuleMessage};

const PROFILE: &[Trigger] = &[Trigger::F0Create, Trigger::F0Update];

pub fn rules() -> Vec<Rule> {
    vec![
        Rule::new(
            "F0-1",
            &[Trigger::F0Create],
            NotificationKind::Celebration,
            Priority::Normal,
            365,
            |_| true,
            welcome,
        ),
        Rule::new(
            "F0-2",
            PROFILE,
            NotificationKind::Insight,
            Priority::Normal,
            7,
            |ctx| ctx.cycle.using_default,
            |_| {
                RuleMessage::new(
                    "Complete your cycle details",
                    "We're using a typical cycle length until you tell us the date of your last \
                     period and how long your cycles usually are. Predictions will get personal \
                     once you do.",
                )
            },
        ),
        Rule::new(
            "F0-3",
            PROFILE,
            NotificationKind::Alert,
            Priority::Urgent,
            30,
            |ctx| ctx.profile.smokes,
            |_| {
                RuleMessage::new(
                    "Smoking and fertility",
                    "Smoking lowers fertility for both partners and is one of the most effective \
                     things to change while trying to conceive. Your care team can help you plan \
                     a way to quit.",
                )
            },
        ),
        Rule::new(
            "F0-4",
            PROFILE,
            NotificationKind::Tip,
            Priority::Normal,
            30,
            |ctx| ctx.profile.consumes_alcohol,
            |_| {
                RuleMessage::new(
                    "Cutting back on alcohol",
                    "Reducing alcohol, especially around your fertile window, supports egg \
                     quality and early pregnancy. Log alcohol days so we can show you the pattern.",
                )
            },
        ),
        Rule::new(
            "F0-5",
            PROFILE,
            NotificationKind::Tip,
            Priority::Normal,
            30,
            |ctx| !ctx.profile.takes_supplements,
            |_| {
                RuleMessage::new(
                    "Folic acid before conception",
                    "A daily folic acid supplement is recommended for everyone trying to conceive. \
                     Ask your doctor which prenatal vitamin suits you.",
                )
            },
        ),
        Rule::new(
            "F0-6",
            PROFILE,
            NotificationKind::Insight,
            Priority::Urgent,
            90,
            trying_long,
            |ctx| {
                let months = ctx.profile.months_trying.unwrap_or(0);
                RuleMessage::new(
                    "Time to talk to a specialist",
                    format!(
                        "You've been trying for {months} months. A fertility consultation can rule \
                         out common causes early; your lab exam form (F3) is a good place to start."
                    ),
                )
            },
        ),
        Rule::new(
            "F0-7",
            PROFILE,
            NotificationKind::Insight,
            Priority::Normal,
            30,
            |ctx| ctx.profile.cycle_regularity == CycleRegularity::Irregular,
            |_| {
                RuleMessage::new(
                    "Irregular cycles",
                    "With irregular cycles, calendar predictions are less reliable. Tracking LH \
                     tests and cervical mucus gives a much better picture of ovulation.",
                )
            },
        ),
        Rule::new(
            "U-1",
            &[Trigger::F0Update],
            NotificationKind::Insight,
            Priority::Low,
            0,
            |ctx| !ctx.cycle.using_default,
            window_updated,
        ),
    ]
}

/// 12 months, or 6 from age 35.
fn trying_long(ctx: &RuleContext) -> bool {
    let threshold = match ctx.profile.age {
        Some(age) if age >= 35 => 6,
        _ => 12,
    };
    ctx.profile.months_trying.is_some_and(|m| m >= threshold)
}

fn welcome(ctx: &RuleContext) -> RuleMessage {
    let (start, end) = upcoming_fertile_window(ctx);
    RuleMessage::new(
        "Welcome to your fertility plan",
        format!(
            "Your profile is set up. You're on cycle day {} and your next fertile window is \
             {} to {}.{}",
            ctx.cycle.cycle_day,
            fmt_date(start),
            fmt_date(end),
            estimate_note(ctx)
        ),
    )
}

fn window_updated(ctx: &RuleContext) -> RuleMessage {
    let (start, end) = upcoming_fertile_window(ctx);
    RuleMessage::new(
        "Predictions updated",
        format!(
            "With your new details your cycle is {} days long. Next fertile window: {} to {}, \
             next period around {}.",
            ctx.cycle.cycle_length,
            fmt_date(start),
            fmt_date(end),
            fmt_date(ctx.cycle.next_period.date)
        ),
    )
}
