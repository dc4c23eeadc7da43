use serde::{Deserialize, Serialize};
use std::fmt;

/// Bar granularity requested from the data provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Interval {
    #[serde(rename = "1m")]
    OneMinute,
    #[serde(rename = "1d")]
    OneDay,
}

impl Interval {
    /// Provider query-string form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Interval::OneMinute => "1m",
            Interval::OneDay => "1d",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "1m" => Some(Interval::OneMinute),
            "1d" => Some(Interval::OneDay),
            _ => None,
        }
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How far back a history request reaches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Lookback {
    #[serde(rename = "5d")]
    FiveDays,
    #[serde(rename = "3mo")]
    ThreeMonths,
    #[serde(rename = "6mo")]
    SixMonths,
}

impl Lookback {
    /// Provider query-string form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Lookback::FiveDays => "5d",
            Lookback::ThreeMonths => "3mo",
            Lookback::SixMonths => "6mo",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "5d" => Some(Lookback::FiveDays),
            "3mo" => Some(Lookback::ThreeMonths),
            "6mo" => Some(Lookback::SixMonths),
            _ => None,
        }
    }
}

impl fmt::Display for Lookback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One OHLCV row for a single trading period.
///
/// Timestamps are Unix milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceBar {
    pub time: i64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

impl PriceBar {
    /// Check the OHLCV shape invariant: the high caps every other price, the
    /// low floors them, and volume is non-negative.
    pub fn is_well_formed(&self) -> bool {
        self.high >= self.open.max(self.close).max(self.low)
            && self.low <= self.open.min(self.close).min(self.high)
            && self.volume >= 0.0
    }

    /// True when the candle closed at or above its open.
    pub fn is_rising(&self) -> bool {
        self.close >= self.open
    }
}

/// Ordered OHLCV history for one instrument at one granularity.
///
/// Built fresh per fetch; immutable once handed to a computation pass. The
/// `instrument` field carries the fully-qualified identifier that actually
/// resolved (e.g. "2330.TW"), or the raw input when nothing did.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceSeries {
    pub instrument: String,
    pub interval: Interval,
    bars: Vec<PriceBar>,
}

impl PriceSeries {
    /// Build a series from provider rows, normalizing to the series
    /// invariant: ascending by timestamp, one bar per distinct timestamp.
    pub fn from_bars(instrument: impl Into<String>, interval: Interval, mut bars: Vec<PriceBar>) -> Self {
        bars.sort_by_key(|b| b.time);
        bars.dedup_by_key(|b| b.time);
        Self {
            instrument: instrument.into(),
            interval,
            bars,
        }
    }

    /// A series with no bars: the canonical "symbol not found" value.
    pub fn empty(instrument: impl Into<String>, interval: Interval) -> Self {
        Self {
            instrument: instrument.into(),
            interval,
            bars: Vec::new(),
        }
    }

    pub fn bars(&self) -> &[PriceBar] {
        &self.bars
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    pub fn first(&self) -> Option<&PriceBar> {
        self.bars.first()
    }

    pub fn last(&self) -> Option<&PriceBar> {
        self.bars.last()
    }

    /// Closing prices in series order.
    pub fn closes(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.close).collect()
    }
}
