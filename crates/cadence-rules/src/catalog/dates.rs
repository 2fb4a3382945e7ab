//! Calendar dates for cycle days, used by message templates.

use chrono::{Duration, NaiveDate};

use cadence_context::RuleContext;

/// Calendar date of `cycle_day` in the current cycle.
pub(crate) fn date_of_cycle_day(ctx: &RuleContext, cycle_day: u32) -> NaiveDate {
    let offset = i64::from(cycle_day) - i64::from(ctx.cycle.cycle_day);
    ctx.as_of + Duration::days(offset)
}

/// The current fertile window, or the next cycle's once this one has closed.
pub(crate) fn upcoming_fertile_window(ctx: &RuleContext) -> (NaiveDate, NaiveDate) {
    let window = ctx.cycle.fertile_window;
    if ctx.cycle.cycle_day <= window.end {
        (
            date_of_cycle_day(ctx, window.start),
            date_of_cycle_day(ctx, window.end),
        )
    } else {
        let next_start = ctx.cycle.next_period.date;
        (
            next_start + Duration::days(i64::from(window.start) - 1),
            next_start + Duration::days(i64::from(window.end) - 1),
        )
    }
}

pub(crate) fn fmt_date(date: NaiveDate) -> String {
    date.format("%b %-d").to_string()
}

/// Suffix appended to cycle-derived messages when the inputs were estimated.
pub(crate) fn estimate_note(ctx: &RuleContext) -> &'static str {
    if ctx.cycle.using_default {
        " This is an estimate based on a typical cycle; add your cycle details for a personal one."
    } else {
        ""
    }
}
