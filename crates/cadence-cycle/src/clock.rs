//! CycleClock: the configured entry point over the pure cycle functions.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use cadence_core::config::CycleConfig;
use cadence_core::models::UserProfile;

use crate::day::{compute_cycle_day, CycleDay, CycleLength};
use crate::next_period::{compute_next_period_date, NextPeriod};
use crate::phase::CyclePhase;
use crate::probability::conception_probability;
use crate::window::{compute_fertile_window, FertileWindow};

/// Everything the rule layer needs to know about a user's cycle on `as_of`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CycleSnapshot {
    pub as_of: NaiveDate,
    pub cycle_day: u32,
    pub cycle_length: u32,
    /// True if the cycle length or the last period date was not user data.
    /// Every derived value below is then an estimate.
    pub using_default: bool,
    pub fertile_window: FertileWindow,
    pub next_period: NextPeriod,
    pub phase: CyclePhase,
    /// `cycle_day - ovulation_day`.
    pub days_from_ovulation: i64,
    pub conception_probability: f64,
}

impl CycleSnapshot {
    pub fn in_fertile_window(&self) -> bool {
        self.fertile_window.contains(self.cycle_day)
    }

    /// Days until the fertile window opens in the current cycle, `None` once it has.
    pub fn days_until_fertile_window(&self) -> Option<u32> {
        self.fertile_window
            .start
            .checked_sub(self.cycle_day)
            .filter(|days| *days > 0)
    }
}

/// Cycle arithmetic bound to a [`CycleConfig`].
#[derive(Debug, Clone)]
pub struct CycleClock {
    luteal_phase_length: u32,
    default_cycle_length: u32,
    menstruation_length: u32,
}

impl CycleClock {
    pub fn new(config: &CycleConfig) -> Self {
        Self {
            luteal_phase_length: config.luteal_phase_length,
            default_cycle_length: config.default_cycle_length,
            menstruation_length: config.menstruation_length,
        }
    }

    pub fn luteal_phase_length(&self) -> u32 {
        self.luteal_phase_length
    }

    pub fn resolve_cycle_length(&self, raw: Option<u32>) -> CycleLength {
        CycleLength::resolve(raw, self.default_cycle_length)
    }

    pub fn cycle_day(
        &self,
        last_period_date: Option<NaiveDate>,
        cycle_length: Option<u32>,
        as_of: NaiveDate,
    ) -> CycleDay {
        let length = self.resolve_cycle_length(cycle_length);
        CycleDay {
            day: compute_cycle_day(last_period_date, length.days, as_of),
            using_default: length.using_default || last_period_date.is_none(),
        }
    }

    pub fn fertile_window(&self, cycle_length: u32) -> FertileWindow {
        compute_fertile_window(cycle_length, self.luteal_phase_length)
    }

    pub fn next_period(
        &self,
        last_period_date: Option<NaiveDate>,
        cycle_length: Option<u32>,
        as_of: NaiveDate,
    ) -> NextPeriod {
        let length = self.resolve_cycle_length(cycle_length);
        let mut next = compute_next_period_date(last_period_date, length.days, as_of);
        next.using_default |= length.using_default;
        next
    }

    pub fn phase(&self, cycle_day: u32, window: &FertileWindow) -> CyclePhase {
        CyclePhase::classify(cycle_day, window, self.menstruation_length)
    }

    /// Compute the full snapshot for a profile.
    pub fn snapshot(&self, profile: &UserProfile, as_of: NaiveDate) -> CycleSnapshot {
        let length = self.resolve_cycle_length(profile.cycle_length);
        let day = self.cycle_day(profile.last_period_date, profile.cycle_length, as_of);
        let window = self.fertile_window(length.days);
        let next_period = self.next_period(profile.last_period_date, profile.cycle_length, as_of);
        let days_from_ovulation = i64::from(day.day) - i64::from(window.ovulation_day);

        CycleSnapshot {
            as_of,
            cycle_day: day.day,
            cycle_length: length.days,
            using_default: day.using_default,
            fertile_window: window,
            next_period,
            phase: self.phase(day.day, &window),
            days_from_ovulation,
            conception_probability: conception_probability(days_from_ovulation),
        }
    }
}

impl Default for CycleClock {
    fn default() -> Self {
        Self::new(&CycleConfig::default())
    }
}
