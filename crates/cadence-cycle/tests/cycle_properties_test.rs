use chrono::{Days, NaiveDate};
use proptest::prelude::*;

use cadence_cycle::{compute_cycle_day, compute_fertile_window, compute_next_period_date};

fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2000, 1, 1).unwrap()
}

proptest! {
    #[test]
    fn cycle_day_within_bounds(
        start_offset in 0u64..20_000,
        elapsed in 0u64..20_000,
        cycle_length in 1u32..=100,
    ) {
        let last = base_date() + Days::new(start_offset);
        let as_of = last + Days::new(elapsed);
        let day = compute_cycle_day(Some(last), cycle_length, as_of);
        prop_assert!(day >= 1 && day <= cycle_length);
    }

    #[test]
    fn cycle_day_is_periodic(
        elapsed in 0u64..10_000,
        cycle_length in 1u32..=100,
        periods in 1u64..50,
    ) {
        let last = base_date();
        let as_of = last + Days::new(elapsed);
        let later = as_of + Days::new(periods * u64::from(cycle_length));
        prop_assert_eq!(
            compute_cycle_day(Some(last), cycle_length, as_of),
            compute_cycle_day(Some(last), cycle_length, later)
        );
    }

    #[test]
    fn cycle_day_never_below_one_for_future_period(
        ahead in 1u64..1000,
        cycle_length in 1u32..=100,
    ) {
        let as_of = base_date();
        let last = as_of + Days::new(ahead);
        prop_assert_eq!(compute_cycle_day(Some(last), cycle_length, as_of), 1);
    }

    #[test]
    fn fertile_window_ordering(cycle_length in 1u32..=100, luteal in 1u32..=30) {
        let w = compute_fertile_window(cycle_length, luteal);
        prop_assert!(1 <= w.start);
        prop_assert!(w.start <= w.ovulation_day);
        prop_assert!(w.ovulation_day <= w.end);
        prop_assert!(w.end <= cycle_length);
    }

    #[test]
    fn next_period_is_smallest_on_or_after_as_of(
        elapsed in 0u64..10_000,
        cycle_length in 1u32..=100,
    ) {
        let last = base_date();
        let as_of = last + Days::new(elapsed);
        let next = compute_next_period_date(Some(last), cycle_length, as_of);
        prop_assert!(next.date >= as_of);
        prop_assert!(next.days_until < cycle_length);
        prop_assert_eq!((next.date - last).num_days() % i64::from(cycle_length), 0);
    }
}
