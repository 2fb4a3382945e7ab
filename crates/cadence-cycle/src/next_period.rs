//! Next expected period start.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NextPeriod {
    pub date: NaiveDate,
    /// `date - as_of`, never negative.
    pub days_until: u32,
    pub using_default: bool,
}

/// Smallest `last_period_date + N * cycle_length` (N >= 0) that is `>= as_of`.
///
/// Without a `last_period_date` (or with a zero length) the estimate is
/// `as_of + cycle_length` and is flagged `using_default`.
pub fn compute_next_period_date(
    last_period_date: Option<NaiveDate>,
    cycle_length: u32,
    as_of: NaiveDate,
) -> NextPeriod {
    let len = u64::from(cycle_length.max(1));
    let Some(last) = last_period_date.filter(|_| cycle_length > 0) else {
        let date = as_of.checked_add_days(Days::new(len)).unwrap_or(as_of);
        return NextPeriod {
            date,
            days_until: days_between(as_of, date),
            using_default: true,
        };
    };

    if last >= as_of {
        return NextPeriod {
            date: last,
            days_until: days_between(as_of, last),
            using_default: false,
        };
    }

    let elapsed = (as_of - last).num_days() as u64;
    let cycles = elapsed.div_ceil(len);
    let date = last
        .checked_add_days(Days::new(cycles * len))
        .unwrap_or(as_of);
    NextPeriod {
        date,
        days_until: days_between(as_of, date),
        using_default: false,
    }
}

fn days_between(from: NaiveDate, to: NaiveDate) -> u32 {
    (to - from).num_days().clamp(0, i64::from(u32::MAX)) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn mid_cycle() {
        let next = compute_next_period_date(Some(d(2024, 1, 1)), 28, d(2024, 1, 15));
        assert_eq!(next.date, d(2024, 1, 29));
        assert_eq!(next.days_until, 14);
        assert!(!next.using_default);
    }

    #[test]
    fn on_period_start_is_today() {
        let next = compute_next_period_date(Some(d(2024, 1, 1)), 28, d(2024, 1, 29));
        assert_eq!(next.date, d(2024, 1, 29));
        assert_eq!(next.days_until, 0);
    }

    #[test]
    fn many_cycles_later() {
        let next = compute_next_period_date(Some(d(2020, 1, 1)), 30, d(2024, 6, 1));
        assert!(next.date >= d(2024, 6, 1));
        assert!(next.days_until < 30);
        assert_eq!((next.date - d(2020, 1, 1)).num_days() % 30, 0);
    }

    #[test]
    fn future_last_period_is_returned_as_is() {
        let next = compute_next_period_date(Some(d(2024, 2, 10)), 28, d(2024, 2, 1));
        assert_eq!(next.date, d(2024, 2, 10));
        assert_eq!(next.days_until, 9);
    }

    #[test]
    fn missing_last_period_uses_default() {
        let next = compute_next_period_date(None, 28, d(2024, 2, 1));
        assert!(next.using_default);
        assert_eq!(next.days_until, 28);
    }
}
