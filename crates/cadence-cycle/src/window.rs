//! Fertile window around the estimated ovulation day.

use serde::{Deserialize, Serialize};

use cadence_core::constants::{FERTILE_DAYS_AFTER_OVULATION, FERTILE_DAYS_BEFORE_OVULATION};

/// Inclusive cycle-day range with non-negligible conception probability.
///
/// Invariant: `1 <= start <= ovulation_day <= end <= cycle_length`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FertileWindow {
    #[serde(rename = "inicio")]
    pub start: u32,
    #[serde(rename = "fin")]
    pub end: u32,
    #[serde(rename = "diaOvulacion")]
    pub ovulation_day: u32,
}

impl FertileWindow {
    pub fn contains(&self, cycle_day: u32) -> bool {
        (self.start..=self.end).contains(&cycle_day)
    }

    /// Number of days in the window.
    pub fn length_days(&self) -> u32 {
        self.end - self.start + 1
    }
}

/// `ovulation = max(1, len - luteal)`, `start = max(1, ovulation - 5)`,
/// `end = min(len, ovulation + 1)`. A zero `cycle_length` is treated as 1.
pub fn compute_fertile_window(cycle_length: u32, luteal_phase_length: u32) -> FertileWindow {
    let len = cycle_length.max(1);
    let ovulation_day = len.saturating_sub(luteal_phase_length).max(1);
    let start = ovulation_day
        .saturating_sub(FERTILE_DAYS_BEFORE_OVULATION)
        .max(1);
    let end = (ovulation_day + FERTILE_DAYS_AFTER_OVULATION).min(len);
    FertileWindow {
        start,
        end,
        ovulation_day,
    }
}
