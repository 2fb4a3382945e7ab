/// Cadence system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Longest cycle length (days) accepted as measured data.
pub const MAX_CYCLE_LENGTH: u32 = 100;

/// Days before ovulation counted into the fertile window.
pub const FERTILE_DAYS_BEFORE_OVULATION: u32 = 5;

/// Days after ovulation counted into the fertile window.
pub const FERTILE_DAYS_AFTER_OVULATION: u32 = 1;

/// Trailing windows (days) aggregated into every rule context.
pub const SHORT_WINDOW_DAYS: u32 = 3;
pub const WEEK_WINDOW_DAYS: u32 = 7;
pub const FORTNIGHT_WINDOW_DAYS: u32 = 14;

/// Stress and sleep-quality scales are 1..=5.
pub const MIN_SCALE_SCORE: u8 = 1;
pub const MAX_SCALE_SCORE: u8 = 5;

/// Seconds in one calendar day, used for cooldown bucketing.
pub const SECONDS_PER_DAY: i64 = 86_400;
