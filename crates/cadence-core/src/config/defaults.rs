// Single source of truth for all default values.

// --- Cycle ---
pub const DEFAULT_CYCLE_LENGTH: u32 = 28;
pub const DEFAULT_LUTEAL_PHASE_LENGTH: u32 = 14;
pub const DEFAULT_MENSTRUATION_LENGTH: u32 = 5;

// --- Notifications ---
pub const DEFAULT_DAILY_NOTIFICATION_LIMIT: u32 = 5;

// --- Storage ---
pub const DEFAULT_DB_FILENAME: &str = "cadence.db";
pub const DEFAULT_BUSY_TIMEOUT_MS: u32 = 5_000;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = true;
