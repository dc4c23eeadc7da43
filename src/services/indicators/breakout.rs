//! Range-projection breakout target and deduction points.
//!
//! Both read the daily series. The breakout target projects the trailing
//! 20-bar high-low range above the last close by a fixed multiplier; the
//! deduction points mark the bars about to roll out of the common moving
//! average windows, the price a trader compares today against.

use crate::types::{DeductionPoint, PriceSeries};

/// Trailing range window, in bars.
pub const BREAKOUT_WINDOW: usize = 20;

/// Range projection multiplier.
pub const BREAKOUT_MULTIPLIER: f64 = 1.382;

/// Offsets back from the latest bar marked as deduction points. 20 and 60
/// bars correspond to the monthly and quarterly moving averages.
pub const DEDUCTION_OFFSETS: [usize; 2] = [20, 60];

/// Breakout target: last close plus the trailing window's high-low range
/// times the multiplier.
///
/// Series shorter than the window use every bar they have; only an empty
/// series has no target.
pub fn breakout_target(series: &PriceSeries) -> Option<f64> {
    let bars = series.bars();
    let last = bars.last()?;
    let start = bars.len().saturating_sub(BREAKOUT_WINDOW);
    let window = &bars[start..];

    let highest = window.iter().map(|b| b.high).fold(f64::MIN, f64::max);
    let lowest = window.iter().map(|b| b.low).fold(f64::MAX, f64::min);
    Some(last.close + (highest - lowest) * BREAKOUT_MULTIPLIER)
}

/// The bar `offset` positions back from the latest, or `None` when the
/// series does not reach that far.
pub fn deduction_point(series: &PriceSeries, offset: usize) -> Option<DeductionPoint> {
    let bars = series.bars();
    if bars.len() <= offset {
        return None;
    }
    let bar = &bars[bars.len() - 1 - offset];
    Some(DeductionPoint {
        time: bar.time,
        close: bar.close,
        offset,
    })
}

/// Deduction points for the standard offsets, skipping those out of range.
pub fn deduction_points(series: &PriceSeries) -> Vec<DeductionPoint> {
    DEDUCTION_OFFSETS
        .iter()
        .filter_map(|&offset| deduction_point(series, offset))
        .collect()
}
