use serde::{Deserialize, Serialize};

use crate::window::FertileWindow;

/// Coarse phase of the cycle for a given cycle day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CyclePhase {
    Menstrual,
    Follicular,
    Fertile,
    Ovulation,
    Luteal,
}

impl CyclePhase {
    /// Ovulation wins over fertile, fertile over menstrual.
    pub fn classify(cycle_day: u32, window: &FertileWindow, menstruation_length: u32) -> Self {
        if cycle_day == window.ovulation_day {
            CyclePhase::Ovulation
        } else if window.contains(cycle_day) {
            CyclePhase::Fertile
        } else if cycle_day <= menstruation_length {
            CyclePhase::Menstrual
        } else if cycle_day < window.start {
            CyclePhase::Follicular
        } else {
            CyclePhase::Luteal
        }
    }
}
