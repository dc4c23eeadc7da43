//! Price Source Adapter: market-suffix fallback over a [`HistoryProvider`]
//! plus short-lived memoization of fetch results.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info};

use crate::error::Result;
use crate::services::Cache;
use crate::sources::HistoryProvider;
use crate::types::{Interval, Lookback, PriceSeries};

/// Market suffixes tried in priority order: Taiwan Stock Exchange listings
/// first, then the Taipei Exchange over-the-counter board.
pub const MARKET_SUFFIXES: [&str; 2] = [".TW", ".TWO"];

/// Fetches OHLCV history for bare Taiwan ticker codes.
///
/// A code like `2330` is qualified with each suffix in [`MARKET_SUFFIXES`]
/// until one yields data; a symbol that already carries a recognized suffix
/// is used verbatim. "Nothing under any suffix" is an empty series, never an
/// error — transport trouble is the only thing that fails a fetch.
pub struct MarketDataService {
    provider: Arc<dyn HistoryProvider>,
    cache: Cache<PriceSeries>,
}

impl MarketDataService {
    pub fn new(provider: Arc<dyn HistoryProvider>, cache_ttl: Duration) -> Self {
        Self {
            provider,
            cache: Cache::new(cache_ttl),
        }
    }

    /// Fully-qualified instrument ids to try, in priority order.
    fn candidates(code: &str) -> Vec<String> {
        if MARKET_SUFFIXES
            .iter()
            .any(|suffix| code.ends_with(suffix))
        {
            return vec![code.to_string()];
        }
        MARKET_SUFFIXES
            .iter()
            .map(|suffix| format!("{}{}", code, suffix))
            .collect()
    }

    /// Fetch one series, memoized by (symbol, lookback, interval) for the
    /// cache TTL. Empty results are memoized too, so an unknown symbol does
    /// not hammer the provider on every keystroke-and-enter.
    pub async fn fetch(
        &self,
        symbol: &str,
        lookback: Lookback,
        interval: Interval,
    ) -> Result<PriceSeries> {
        let code = symbol.trim().to_uppercase();
        if code.is_empty() {
            return Ok(PriceSeries::empty(code, interval));
        }

        let key = format!("{}:{}:{}", code, lookback, interval);
        if let Some(series) = self.cache.get(&key) {
            debug!("Cache hit for {} {} {}", code, lookback, interval);
            return Ok(series);
        }

        for instrument in Self::candidates(&code) {
            let bars = self
                .provider
                .fetch_bars(&instrument, lookback, interval)
                .await?;
            if bars.is_empty() {
                debug!("No bars for {} from {}", instrument, self.provider.name());
                continue;
            }

            let series = PriceSeries::from_bars(instrument, interval, bars);
            info!(
                "Fetched {} {} bars for {} ({})",
                series.len(),
                interval,
                series.instrument,
                lookback
            );
            self.cache.insert(key, series.clone());
            return Ok(series);
        }

        let series = PriceSeries::empty(code, interval);
        self.cache.insert(key, series.clone());
        Ok(series)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidates_append_suffixes_in_order() {
        let candidates = MarketDataService::candidates("2330");
        assert_eq!(candidates, vec!["2330.TW".to_string(), "2330.TWO".to_string()]);
    }

    #[test]
    fn test_candidates_keep_qualified_symbol_verbatim() {
        assert_eq!(
            MarketDataService::candidates("5483.TWO"),
            vec!["5483.TWO".to_string()]
        );
        assert_eq!(
            MarketDataService::candidates("2330.TW"),
            vec!["2330.TW".to_string()]
        );
    }
}
