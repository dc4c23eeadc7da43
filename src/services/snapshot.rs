//! One-shot assembly of everything the dashboard renders for a symbol.

use chrono::Utc;
use tracing::debug;

use crate::config::Config;
use crate::error::{AppError, Result};
use crate::services::indicators::{
    breakout_target, compute_bands, deduction_points, BOLLINGER_WINDOW,
};
use crate::services::market_data::MarketDataService;
use crate::services::pivots::{compute_pivots, reference_bar};
use crate::types::MarketSnapshot;

/// Fetch both series for `symbol` and derive the full indicator set.
///
/// The daily series drives every computation; an empty daily result is the
/// "unknown symbol" outcome and maps to [`AppError::NotFound`]. The
/// intraday series is carried for charting only and may legitimately come
/// back empty (thin OTC names), in which case the renderer falls back to
/// the daily chart.
pub async fn build_snapshot(
    market: &MarketDataService,
    config: &Config,
    symbol: &str,
) -> Result<MarketSnapshot> {
    let code = symbol.trim().to_uppercase();

    let daily = market
        .fetch(&code, config.daily_lookback, config.daily_interval)
        .await?;
    if daily.is_empty() {
        return Err(AppError::NotFound(format!(
            "no price history for {} on TWSE (.TW) or TPEx (.TWO)",
            code
        )));
    }

    let intraday = market
        .fetch(&code, config.intraday_lookback, config.intraday_interval)
        .await?;

    let reference = reference_bar(&daily)
        .copied()
        .ok_or_else(|| AppError::Compute(format!("no reference bar for {}", code)))?;
    if !reference.is_well_formed() {
        return Err(AppError::Compute(format!(
            "reference bar for {} violates OHLC bounds (H {} L {} C {})",
            code, reference.high, reference.low, reference.close
        )));
    }

    let pivots = compute_pivots(reference.high, reference.low, reference.close);
    let bands = compute_bands(&daily, BOLLINGER_WINDOW);
    let breakout = breakout_target(&daily);
    let deductions = deduction_points(&daily);

    debug!(
        "Assembled snapshot for {} ({} daily / {} intraday bars, CDP {:.2})",
        daily.instrument,
        daily.len(),
        intraday.len(),
        pivots.cdp
    );

    Ok(MarketSnapshot {
        symbol: code,
        instrument: daily.instrument.clone(),
        daily,
        intraday,
        reference,
        pivots,
        bands,
        breakout_target: breakout,
        deductions,
        fetched_at: Utc::now().timestamp_millis(),
    })
}
