//! Yahoo Finance chart-API client.
//!
//! The v8 chart endpoint is the same feed yfinance wraps; it needs no key
//! and covers Taiwan listings under their `.TW`/`.TWO` instrument ids. The
//! payload nests the OHLCV arrays under `indicators.quote[0]`, parallel to
//! a separate `timestamp` array; [`flatten_chart`] zips those levels into
//! flat [`PriceBar`] rows, which is the normalization contract the rest of
//! the crate builds on.

use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

use super::HistoryProvider;
use crate::error::{AppError, Result};
use crate::types::{Interval, Lookback, PriceBar};

const CHART_BASE_URL: &str = "https://query1.finance.yahoo.com/v8/finance/chart";

/// Yahoo Finance chart response envelope.
#[derive(Debug, Deserialize)]
struct YahooChartResponse {
    chart: YahooChart,
}

#[derive(Debug, Deserialize)]
struct YahooChart {
    result: Option<Vec<YahooChartResult>>,
    error: Option<YahooChartError>,
}

#[derive(Debug, Deserialize)]
struct YahooChartError {
    code: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct YahooChartResult {
    timestamp: Option<Vec<i64>>,
    indicators: YahooIndicators,
}

#[derive(Debug, Deserialize)]
struct YahooIndicators {
    quote: Vec<YahooQuote>,
}

/// The nested quote columns: one array per attribute, null entries for
/// sessions with no trade (halts, lunch-break minutes).
#[derive(Debug, Deserialize)]
struct YahooQuote {
    open: Option<Vec<Option<f64>>>,
    high: Option<Vec<Option<f64>>>,
    low: Option<Vec<Option<f64>>>,
    close: Option<Vec<Option<f64>>>,
    volume: Option<Vec<Option<u64>>>,
}

/// Flatten a chart payload into one [`PriceBar`] per row.
///
/// A provider-level "Not Found" (and an absent result set or timestamp
/// array) becomes an empty vector — the canonical unknown-symbol signal. A
/// result that has timestamps but no quote columns violates the schema and
/// is a fetch failure. Rows with null prices are dropped.
fn flatten_chart(response: YahooChartResponse) -> Result<Vec<PriceBar>> {
    if let Some(error) = response.chart.error {
        if error.code.eq_ignore_ascii_case("not found") {
            return Ok(Vec::new());
        }
        return Err(AppError::FetchFailed(format!(
            "Provider error: {} - {}",
            error.code, error.description
        )));
    }

    let Some(result) = response.chart.result.and_then(|r| r.into_iter().next()) else {
        return Ok(Vec::new());
    };

    let Some(timestamps) = result.timestamp else {
        // Valid instrument, nothing traded in the window.
        return Ok(Vec::new());
    };

    let quote = result
        .indicators
        .quote
        .into_iter()
        .next()
        .ok_or_else(|| AppError::FetchFailed("Chart result has no quote columns".to_string()))?;

    let opens = quote.open.unwrap_or_default();
    let highs = quote.high.unwrap_or_default();
    let lows = quote.low.unwrap_or_default();
    let closes = quote.close.unwrap_or_default();
    let volumes = quote.volume.unwrap_or_default();

    let mut bars = Vec::with_capacity(timestamps.len());
    for (i, &timestamp) in timestamps.iter().enumerate() {
        let row = (
            opens.get(i).copied().flatten(),
            highs.get(i).copied().flatten(),
            lows.get(i).copied().flatten(),
            closes.get(i).copied().flatten(),
        );
        let (Some(open), Some(high), Some(low), Some(close)) = row else {
            continue;
        };
        if close <= 0.0 {
            continue;
        }

        bars.push(PriceBar {
            // Chart timestamps are epoch seconds; the crate speaks millis.
            time: timestamp * 1000,
            open,
            high,
            low,
            close,
            volume: volumes.get(i).copied().flatten().unwrap_or(0) as f64,
        });
    }

    Ok(bars)
}

/// HTTP client for the Yahoo Finance chart endpoint.
pub struct YahooChartClient {
    client: Client,
}

impl YahooChartClient {
    /// Create a client with the given request timeout.
    pub fn new(timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent("Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36")
            .build()
            .expect("Failed to create HTTP client");

        Self { client }
    }
}

impl Default for YahooChartClient {
    fn default() -> Self {
        Self::new(Duration::from_secs(30))
    }
}

#[async_trait::async_trait]
impl HistoryProvider for YahooChartClient {
    fn name(&self) -> &'static str {
        "yahoo"
    }

    async fn fetch_bars(
        &self,
        instrument: &str,
        lookback: Lookback,
        interval: Interval,
    ) -> Result<Vec<PriceBar>> {
        let url = format!(
            "{}/{}?range={}&interval={}&includePrePost=false",
            CHART_BASE_URL,
            instrument,
            lookback.as_str(),
            interval.as_str()
        );

        debug!("Fetching {} chart for {} ({})", interval, instrument, lookback);

        let response = self.client.get(&url).send().await?;
        let status = response.status();

        // Unknown instruments come back as 404 with an error body; that is
        // the not-found signal, not a transport failure.
        if status == StatusCode::NOT_FOUND {
            return Ok(Vec::new());
        }
        if !status.is_success() {
            return Err(AppError::FetchFailed(format!(
                "Provider returned HTTP {} for {}",
                status, instrument
            )));
        }

        let payload: YahooChartResponse = response.json().await?;
        flatten_chart(payload)
    }
}
