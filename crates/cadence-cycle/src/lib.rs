//! # cadence-cycle
//!
//! Pure date arithmetic over a menstrual-cycle profile.
//! Nothing here fails: missing or invalid inputs fall back to configured
//! defaults and set `using_default`, so callers can render non-committal guidance.

pub mod clock;
pub mod day;
pub mod next_period;
pub mod phase;
pub mod probability;
pub mod window;

pub use clock::{CycleClock, CycleSnapshot};
pub use day::{compute_cycle_day, CycleDay, CycleLength};
pub use next_period::{compute_next_period_date, NextPeriod};
pub use phase::CyclePhase;
pub use probability::conception_probability;
pub use window::{compute_fertile_window, FertileWindow};
