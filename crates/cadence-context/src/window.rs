//! Trailing-window aggregation over a sparse, date-keyed log history.
//!
//! A window of `N` days ending at `as_of` covers `(as_of - N, as_of]`.
//! Membership is decided by each log's calendar date, never by its position,
//! so missing days simply contribute nothing.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use cadence_core::models::DailyLog;

/// Aggregates for one trailing window.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowStats {
    /// Window size in days.
    pub days: u32,
    /// Distinct dates inside the window that have a log.
    pub days_logged: u32,
    pub avg_sleep_hours: Option<f64>,
    pub avg_sleep_quality: Option<f64>,
    pub avg_stress: Option<f64>,
    /// Logged days with alcohol.
    pub alcohol_days: u32,
    pub avg_activity_minutes: Option<f64>,
    pub avg_sun_minutes: Option<f64>,
    pub avg_water_glasses: Option<f64>,
    pub avg_veggie_servings: Option<f64>,
    /// Logged days with at least one symptom.
    pub symptom_days: u32,
}

impl WindowStats {
    /// Every day of the window has a log.
    pub fn is_complete(&self) -> bool {
        self.days > 0 && self.days_logged >= self.days
    }
}

/// Aggregate `logs` (one per date, as produced by the builder) over the
/// `days`-day window ending at `as_of`.
pub fn aggregate<'a, I>(logs: I, as_of: NaiveDate, days: u32) -> WindowStats
where
    I: IntoIterator<Item = &'a DailyLog>,
{
    let in_window: Vec<&DailyLog> = logs
        .into_iter()
        .filter(|log| {
            let age = (as_of - log.date).num_days();
            (0..i64::from(days)).contains(&age)
        })
        .collect();

    WindowStats {
        days,
        days_logged: in_window.len() as u32,
        avg_sleep_hours: mean(in_window.iter().filter_map(|l| l.sleep_hours)),
        avg_sleep_quality: mean(in_window.iter().filter_map(|l| l.sleep_quality.map(f64::from))),
        avg_stress: mean(in_window.iter().filter_map(|l| l.stress_level.map(f64::from))),
        alcohol_days: in_window.iter().filter(|l| l.alcohol).count() as u32,
        avg_activity_minutes: mean(
            in_window
                .iter()
                .filter_map(|l| l.activity_minutes.map(f64::from)),
        ),
        avg_sun_minutes: mean(in_window.iter().filter_map(|l| l.sun_minutes.map(f64::from))),
        avg_water_glasses: mean(in_window.iter().filter_map(|l| l.water_glasses.map(f64::from))),
        avg_veggie_servings: mean(
            in_window
                .iter()
                .filter_map(|l| l.veggie_servings.map(f64::from)),
        ),
        symptom_days: in_window.iter().filter(|l| !l.symptoms.is_empty()).count() as u32,
    }
}

fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let (sum, count) = values.fold((0.0, 0u32), |(s, c), v| (s + v, c + 1));
    (count > 0).then(|| sum / f64::from(count))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, day).unwrap()
    }

    fn log(day: u32, sleep: f64, stress: u8, alcohol: bool) -> DailyLog {
        let mut l = DailyLog::new("u1", d(day));
        l.sleep_hours = Some(sleep);
        l.stress_level = Some(stress);
        l.alcohol = alcohol;
        l
    }

    #[test]
    fn window_uses_dates_not_positions() {
        // Only 10 and 8 fall inside the 3-day window ending on the 10th.
        let logs = vec![log(1, 4.0, 5, true), log(8, 6.0, 2, false), log(10, 8.0, 4, true)];
        let stats = aggregate(&logs, d(10), 3);
        assert_eq!(stats.days_logged, 2);
        assert_eq!(stats.avg_sleep_hours, Some(7.0));
        assert_eq!(stats.avg_stress, Some(3.0));
        assert_eq!(stats.alcohol_days, 1);
        assert!(!stats.is_complete());
    }

    #[test]
    fn future_logs_are_excluded() {
        let logs = vec![log(11, 8.0, 1, false)];
        let stats = aggregate(&logs, d(10), 7);
        assert_eq!(stats.days_logged, 0);
        assert_eq!(stats.avg_sleep_hours, None);
    }

    #[test]
    fn averages_skip_missing_values() {
        let mut partial = DailyLog::new("u1", d(9));
        partial.water_glasses = Some(6);
        let logs = vec![log(10, 8.0, 2, false), partial];
        let stats = aggregate(&logs, d(10), 7);
        assert_eq!(stats.days_logged, 2);
        assert_eq!(stats.avg_sleep_hours, Some(8.0));
        assert_eq!(stats.avg_water_glasses, Some(6.0));
    }
}
