//! Bollinger band envelope.
//!
//! Consists of:
//! - Middle band: trailing mean of closes over the window
//! - Upper band: middle + 2 * sample std dev
//! - Lower band: middle - 2 * sample std dev
//!
//! The sample (n - 1) standard deviation is used, matching how charting
//! tools compute the band, so a constant close produces zero-width bands
//! rather than a division artifact.

use crate::types::{BandPoint, PriceSeries};

/// Trailing window length, in bars.
pub const BOLLINGER_WINDOW: usize = 20;

/// Band half-width, in standard deviations.
pub const BOLLINGER_MULTIPLIER: f64 = 2.0;

/// Sample standard deviation of `values` around `mean`.
///
/// Returns 0.0 for fewer than two values, where the n - 1 divisor is
/// undefined.
fn sample_std(values: &[f64], mean: f64) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let variance: f64 = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>()
        / (values.len() - 1) as f64;
    variance.sqrt()
}

/// Compute the band envelope over the whole series.
///
/// One [`BandPoint`] per bar from index `window - 1` onward; bars before
/// that have no complete trailing window and produce nothing. A series
/// shorter than the window yields an empty envelope.
pub fn compute_bands(series: &PriceSeries, window: usize) -> Vec<BandPoint> {
    let bars = series.bars();
    if window == 0 || bars.len() < window {
        return Vec::new();
    }

    let closes = series.closes();
    let mut points = Vec::with_capacity(bars.len() - window + 1);
    for (end, bar) in bars.iter().enumerate().skip(window - 1) {
        let slice = &closes[end + 1 - window..=end];
        let middle = slice.iter().sum::<f64>() / window as f64;
        let std_dev = sample_std(slice, middle);
        points.push(BandPoint {
            time: bar.time,
            middle,
            upper: middle + BOLLINGER_MULTIPLIER * std_dev,
            lower: middle - BOLLINGER_MULTIPLIER * std_dev,
        });
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Interval, PriceBar};

    const EPS: f64 = 1e-9;

    fn series_of_closes(closes: &[f64]) -> PriceSeries {
        let bars = closes
            .iter()
            .enumerate()
            .map(|(i, &close)| PriceBar {
                time: i as i64 * 60_000,
                open: close,
                high: close + 1.0,
                low: close - 1.0,
                close,
                volume: 100.0,
            })
            .collect();
        PriceSeries::from_bars("2330.TW", Interval::OneDay, bars)
    }

    #[test]
    fn test_short_series_yields_no_bands() {
        let series = series_of_closes(&[100.0, 101.0, 102.0]);
        assert!(compute_bands(&series, 5).is_empty());
        assert!(compute_bands(&series, 0).is_empty());
    }

    #[test]
    fn test_one_point_per_complete_window() {
        let series = series_of_closes(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        let bands = compute_bands(&series, 4);
        assert_eq!(bands.len(), 3);
        // First point lands on the bar that completes the first window.
        assert_eq!(bands[0].time, 3 * 60_000);
    }

    #[test]
    fn test_constant_closes_collapse_bands() {
        let series = series_of_closes(&[50.0; 8]);
        for point in compute_bands(&series, 4) {
            assert!((point.upper - 50.0).abs() < EPS);
            assert!((point.middle - 50.0).abs() < EPS);
            assert!((point.lower - 50.0).abs() < EPS);
            assert!(point.width() < EPS);
        }
    }

    #[test]
    fn test_known_window_values() {
        // Window 1.0..=5.0: mean 3, sample variance 10 / 4 = 2.5.
        let series = series_of_closes(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        let bands = compute_bands(&series, 5);
        assert_eq!(bands.len(), 1);
        let std_dev = 2.5_f64.sqrt();
        assert!((bands[0].middle - 3.0).abs() < EPS);
        assert!((bands[0].upper - (3.0 + 2.0 * std_dev)).abs() < EPS);
        assert!((bands[0].lower - (3.0 - 2.0 * std_dev)).abs() < EPS);
    }

    #[test]
    fn test_width_is_four_standard_deviations() {
        let series = series_of_closes(&[3.0, 9.0, 4.0, 8.0, 5.0, 7.0, 6.0]);
        for point in compute_bands(&series, 4) {
            let implied_std = (point.upper - point.middle) / BOLLINGER_MULTIPLIER;
            assert!((point.width() - 4.0 * implied_std).abs() < EPS);
        }
    }
}
