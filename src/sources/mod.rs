pub mod yahoo;

pub use yahoo::YahooChartClient;

use crate::error::Result;
use crate::types::{Interval, Lookback, PriceBar};
use async_trait::async_trait;

/// A remote provider of historical OHLCV bars.
///
/// Implementations take a fully-qualified instrument identifier (suffix
/// already applied, e.g. "2330.TW") and return normalized, flat bars. An
/// instrument the provider does not know yields `Ok` with an empty vector;
/// only transport and schema trouble is an error. The suffix-fallback logic
/// above this seam relies on that distinction.
#[async_trait]
pub trait HistoryProvider: Send + Sync {
    /// A short identifier for logging.
    fn name(&self) -> &'static str;

    /// Fetch bars for one instrument at one granularity.
    async fn fetch_bars(
        &self,
        instrument: &str,
        lookback: Lookback,
        interval: Interval,
    ) -> Result<Vec<PriceBar>>;
}
