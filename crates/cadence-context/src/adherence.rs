//! Logging adherence: recency and consecutive-day streak.

use std::collections::BTreeSet;

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Adherence {
    /// Calendar days between the latest log and `as_of`; `None` without logs.
    pub days_since_last_log: Option<u32>,
    /// Consecutive calendar days with a log, ending at the latest log.
    /// Zero once the latest log is older than yesterday.
    pub log_streak: u32,
    /// Distinct logged dates up to `as_of`.
    pub total_logs: u32,
    pub last_log_date: Option<NaiveDate>,
}

impl Adherence {
    /// `dates` must only contain dates on or before `as_of`.
    pub fn compute(dates: &BTreeSet<NaiveDate>, as_of: NaiveDate) -> Self {
        let Some(&last) = dates.iter().next_back() else {
            return Self::default();
        };
        let gap = (as_of - last).num_days().max(0) as u32;

        let log_streak = if gap <= 1 {
            let mut streak = 0u32;
            let mut expected = last;
            for &date in dates.iter().rev() {
                if date != expected {
                    break;
                }
                streak += 1;
                expected = date - Duration::days(1);
            }
            streak
        } else {
            0
        };

        Self {
            days_since_last_log: Some(gap),
            log_streak,
            total_logs: dates.len() as u32,
            last_log_date: Some(last),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, day).unwrap()
    }

    fn set(days: &[u32]) -> BTreeSet<NaiveDate> {
        days.iter().map(|&x| d(x)).collect()
    }

    #[test]
    fn no_logs() {
        let a = Adherence::compute(&BTreeSet::new(), d(10));
        assert_eq!(a.days_since_last_log, None);
        assert_eq!(a.log_streak, 0);
    }

    #[test]
    fn streak_breaks_on_gap() {
        let a = Adherence::compute(&set(&[3, 4, 6, 7, 8]), d(8));
        assert_eq!(a.log_streak, 3);
        assert_eq!(a.days_since_last_log, Some(0));
        assert_eq!(a.total_logs, 5);
    }

    #[test]
    fn streak_survives_until_end_of_next_day() {
        let a = Adherence::compute(&set(&[6, 7, 8]), d(9));
        assert_eq!(a.log_streak, 3);
        assert_eq!(a.days_since_last_log, Some(1));
    }

    #[test]
    fn stale_streak_is_zero() {
        let a = Adherence::compute(&set(&[6, 7, 8]), d(12));
        assert_eq!(a.log_streak, 0);
        assert_eq!(a.days_since_last_log, Some(4));
    }
}
