//! Cycle day: 1-based position of `as_of` inside the current cycle.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use cadence_core::constants::MAX_CYCLE_LENGTH;

/// Cycle length actually used for arithmetic, and where it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CycleLength {
    pub days: u32,
    /// True when `days` is the configured default, not the user's data.
    pub using_default: bool,
}

impl CycleLength {
    /// Use `raw` when it is in `1..=100`, `default` otherwise.
    pub fn resolve(raw: Option<u32>, default: u32) -> Self {
        match raw {
            Some(days) if (1..=MAX_CYCLE_LENGTH).contains(&days) => Self {
                days,
                using_default: false,
            },
            _ => Self {
                days: default.max(1),
                using_default: true,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CycleDay {
    pub day: u32,
    pub using_default: bool,
}

/// `(elapsed_days mod cycle_length) + 1`, always in `[1, cycle_length]`.
///
/// Returns 1 when `last_period_date` is missing or after `as_of`, or when
/// `cycle_length` is 0.
pub fn compute_cycle_day(
    last_period_date: Option<NaiveDate>,
    cycle_length: u32,
    as_of: NaiveDate,
) -> u32 {
    let Some(last) = last_period_date else {
        return 1;
    };
    if cycle_length == 0 {
        return 1;
    }
    let elapsed = (as_of - last).num_days();
    if elapsed < 0 {
        return 1;
    }
    // elapsed >= 0 and cycle_length >= 1, so the remainder fits in u32.
    (elapsed % i64::from(cycle_length)) as u32 + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn first_day_of_period_is_day_one() {
        assert_eq!(compute_cycle_day(Some(d(2024, 1, 1)), 28, d(2024, 1, 1)), 1);
    }

    #[test]
    fn wraps_after_cycle_length() {
        assert_eq!(compute_cycle_day(Some(d(2024, 1, 1)), 28, d(2024, 1, 28)), 28);
        assert_eq!(compute_cycle_day(Some(d(2024, 1, 1)), 28, d(2024, 1, 29)), 1);
    }

    #[test]
    fn future_last_period_is_day_one() {
        assert_eq!(compute_cycle_day(Some(d(2024, 2, 1)), 28, d(2024, 1, 1)), 1);
    }

    #[test]
    fn missing_inputs_are_day_one() {
        assert_eq!(compute_cycle_day(None, 28, d(2024, 1, 1)), 1);
        assert_eq!(compute_cycle_day(Some(d(2024, 1, 1)), 0, d(2024, 3, 1)), 1);
    }

    #[test]
    fn resolve_flags_default() {
        assert_eq!(
            CycleLength::resolve(Some(31), 28),
            CycleLength { days: 31, using_default: false }
        );
        assert!(CycleLength::resolve(None, 28).using_default);
        assert!(CycleLength::resolve(Some(0), 28).using_default);
        assert!(CycleLength::resolve(Some(101), 28).using_default);
        assert!(!CycleLength::resolve(Some(100), 28).using_default);
    }
}
