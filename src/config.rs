use std::env;
use std::time::Duration;

use crate::types::{Interval, Lookback};

/// Application configuration.
///
/// The market policy (windows, multipliers, suffix order) is fixed by
/// constants near the code that applies it; what lives here are the ambient
/// knobs with environment overrides and the fetch shapes for the two series
/// a render pass needs.
#[derive(Debug, Clone)]
pub struct Config {
    /// Lookback for the daily series used for pivot and indicator math.
    pub daily_lookback: Lookback,
    /// Granularity of the daily series.
    pub daily_interval: Interval,
    /// Lookback for the fine-grained charting series.
    pub intraday_lookback: Lookback,
    /// Granularity of the charting series.
    pub intraday_interval: Interval,
    /// How long a fetch result is memoized before a new upstream call.
    pub cache_ttl: Duration,
    /// HTTP client timeout for provider requests.
    pub http_timeout: Duration,
    /// Symbol shown on startup before the user types one.
    pub default_symbol: String,
}

impl Config {
    /// Load configuration from environment variables, with the defaults the
    /// original dashboard shipped: 6 months of dailies for the math, 5 days
    /// of minute bars for the chart, 10 minutes of fetch memoization.
    pub fn from_env() -> Self {
        let daily_lookback = env::var("DAILY_LOOKBACK")
            .ok()
            .and_then(|v| Lookback::from_str(&v))
            .unwrap_or(Lookback::SixMonths);

        let intraday_lookback = env::var("INTRADAY_LOOKBACK")
            .ok()
            .and_then(|v| Lookback::from_str(&v))
            .unwrap_or(Lookback::FiveDays);

        let cache_ttl_secs: u64 = env::var("CACHE_TTL_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(600);

        let http_timeout_secs: u64 = env::var("HTTP_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(30);

        Self {
            daily_lookback,
            daily_interval: Interval::OneDay,
            intraday_lookback,
            intraday_interval: Interval::OneMinute,
            cache_ttl: Duration::from_secs(cache_ttl_secs),
            http_timeout: Duration::from_secs(http_timeout_secs),
            default_symbol: env::var("DEFAULT_SYMBOL").unwrap_or_else(|_| "2330".to_string()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
