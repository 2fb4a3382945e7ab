use serde::{Deserialize, Serialize};

use super::defaults;

/// Cycle arithmetic configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CycleConfig {
    /// Assumed days between ovulation and the next period.
    pub luteal_phase_length: u32,
    /// Cycle length substituted when the profile has none (or an invalid one).
    pub default_cycle_length: u32,
    /// Days at the start of each cycle classified as menstruation.
    pub menstruation_length: u32,
}

impl Default for CycleConfig {
    fn default() -> Self {
        Self {
            luteal_phase_length: defaults::DEFAULT_LUTEAL_PHASE_LENGTH,
            default_cycle_length: defaults::DEFAULT_CYCLE_LENGTH,
            menstruation_length: defaults::DEFAULT_MENSTRUATION_LENGTH,
        }
    }
}
