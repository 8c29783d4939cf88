/// Reference market capitalisation for the all-share index, in SAR.
/// A market cap at or above this level contributes nothing to the fear score.
pub const MARKET_CAP_REFERENCE: f64 = 3_000_000_000_000.0;

/// Sentiment bucket boundaries over the [0, 100] score range.
pub const VERY_CALM_CEILING: f64 = 25.0;
pub const STABLE_CEILING: f64 = 50.0;
pub const CONCERNED_CEILING: f64 = 75.0;

/// Default return% cutoff for the gainer/loser alert buckets.
pub const DEFAULT_ALERT_THRESHOLD_PCT: u32 = 10;

/// Default time-to-live for cached quotes and profiles, in seconds.
pub const DEFAULT_QUOTE_TTL_SECS: u64 = 3600;

/// Decimal precision for display
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Group name used when a holding has no sector classification.
pub const UNKNOWN_SECTOR: &str = "Unknown";
