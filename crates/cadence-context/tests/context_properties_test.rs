//! Property tests for windowed aggregation and adherence over arbitrary histories.

use std::collections::BTreeSet;

use chrono::{Duration, NaiveDate, TimeZone, Utc};
use proptest::prelude::*;

use cadence_context::{ContextBuilder, ContextInputs};
use cadence_core::models::{DailyLog, UserProfile};

fn base() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
}

proptest! {
    #[test]
    fn window_counts_are_bounded_and_nested(offsets in prop::collection::vec(0i64..40, 0..40)) {
        let as_of = base() + Duration::days(30);
        let logs: Vec<DailyLog> = offsets
            .iter()
            .map(|o| DailyLog::new("u", base() + Duration::days(*o)))
            .collect();
        let profile = UserProfile::new("u", Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
        let now = Utc.from_utc_datetime(&as_of.and_hms_opt(12, 0, 0).unwrap());
        let ctx = ContextBuilder::default().build(&ContextInputs::new(&profile, now).with_logs(&logs));

        prop_assert!(ctx.last_3_days.days_logged <= 3);
        prop_assert!(ctx.last_7_days.days_logged <= 7);
        prop_assert!(ctx.last_14_days.days_logged <= 14);
        prop_assert!(ctx.last_3_days.days_logged <= ctx.last_7_days.days_logged);
        prop_assert!(ctx.last_7_days.days_logged <= ctx.last_14_days.days_logged);

        let distinct: BTreeSet<NaiveDate> = logs.iter().map(|l| l.date).filter(|d| *d <= as_of).collect();
        prop_assert_eq!(ctx.adherence.total_logs as usize, distinct.len());
        prop_assert!(ctx.adherence.log_streak <= ctx.adherence.total_logs);
    }

    #[test]
    fn input_order_does_not_matter(offsets in prop::collection::vec(0i64..20, 0..20)) {
        let as_of = base() + Duration::days(19);
        let now = Utc.from_utc_datetime(&as_of.and_hms_opt(8, 0, 0).unwrap());
        let profile = UserProfile::new("u", Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
        let forward: Vec<DailyLog> = offsets
            .iter()
            .map(|o| DailyLog::new("u", base() + Duration::days(*o)))
            .collect();
        let mut reversed = forward.clone();
        reversed.reverse();

        let builder = ContextBuilder::default();
        let a = builder.build(&ContextInputs::new(&profile, now).with_logs(&forward));
        let b = builder.build(&ContextInputs::new(&profile, now).with_logs(&reversed));
        prop_assert_eq!(a, b);
    }
}
