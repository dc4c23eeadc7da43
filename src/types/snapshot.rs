use serde::{Deserialize, Serialize};

use super::{BandPoint, DeductionPoint, PivotLevels, PriceBar, PriceSeries};

/// Everything one render pass hands to the dashboard: the two price series,
/// the pivot levels with the bar they were derived from, and the optional
/// indicator annotations.
///
/// Request-scoped by design — a snapshot is rebuilt from scratch on every
/// symbol entry and nothing in it survives the pass except through the fetch
/// cache underneath.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketSnapshot {
    /// The requested code, trimmed and uppercased, suffix optional.
    pub symbol: String,
    /// The fully-qualified instrument that resolved (e.g. "2330.TW").
    pub instrument: String,
    /// Daily history: the basis for pivots and indicators.
    pub daily: PriceSeries,
    /// Finer-grained series for charting. May be empty for thin names;
    /// renderers fall back to the daily series.
    pub intraday: PriceSeries,
    /// The completed bar the pivots were computed from.
    pub reference: PriceBar,
    pub pivots: PivotLevels,
    /// Bollinger envelope over the daily closes; empty when the daily series
    /// is shorter than the window.
    pub bands: Vec<BandPoint>,
    /// Range-projection breakout target; absent for an empty daily series.
    pub breakout_target: Option<f64>,
    /// Deduction points at the configured horizons, where the series is long
    /// enough to have them.
    pub deductions: Vec<DeductionPoint>,
    /// When this snapshot was assembled (Unix millis).
    pub fetched_at: i64,
}

impl MarketSnapshot {
    /// Most recent traded price, preferring the finer series.
    pub fn last_price(&self) -> Option<f64> {
        self.intraday
            .last()
            .or_else(|| self.daily.last())
            .map(|b| b.close)
    }
}
