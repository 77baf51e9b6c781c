/// Configuration constants for the application
pub struct Config;

impl Config {
    /// Record field holding the reading timestamp
    pub const DEFAULT_DATE_FIELD: &'static str = "created_at";

    /// Clock re-read interval in milliseconds (1 minute)
    pub const CLOCK_TICK_MS: u32 = 60_000;

    /// localStorage key for the locale preference
    pub const LOCALE_STORAGE_KEY: &'static str = "locale";
}
