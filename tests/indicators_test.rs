//! Unit tests for indicator computation

use pivotwatch::services::indicators::{
    breakout_target, compute_bands, deduction_point, deduction_points, BOLLINGER_MULTIPLIER,
    BOLLINGER_WINDOW, BREAKOUT_MULTIPLIER, BREAKOUT_WINDOW, DEDUCTION_OFFSETS,
};
use pivotwatch::types::{Interval, PriceBar, PriceSeries};

const EPS: f64 = 1e-9;

fn daily_series(rows: &[(f64, f64, f64)]) -> PriceSeries {
    let bars = rows
        .iter()
        .enumerate()
        .map(|(i, &(high, low, close))| PriceBar {
            time: i as i64 * 86_400_000,
            open: close,
            high,
            low,
            close,
            volume: 10_000.0,
        })
        .collect();
    PriceSeries::from_bars("2330.TW", Interval::OneDay, bars)
}

fn closes_series(closes: &[f64]) -> PriceSeries {
    let rows: Vec<(f64, f64, f64)> = closes.iter().map(|&c| (c + 1.0, c - 1.0, c)).collect();
    daily_series(&rows)
}

#[test]
fn test_policy_constants() {
    assert_eq!(BOLLINGER_WINDOW, 20);
    assert_eq!(BOLLINGER_MULTIPLIER, 2.0);
    assert_eq!(BREAKOUT_WINDOW, 20);
    assert_eq!(BREAKOUT_MULTIPLIER, 1.382);
    assert_eq!(DEDUCTION_OFFSETS, [20, 60]);
}

#[test]
fn test_bands_start_at_first_complete_window() {
    let closes: Vec<f64> = (0..25).map(|i| 100.0 + i as f64).collect();
    let series = closes_series(&closes);
    let bands = compute_bands(&series, BOLLINGER_WINDOW);

    assert_eq!(bands.len(), 25 - BOLLINGER_WINDOW + 1);
    assert_eq!(bands[0].time, (BOLLINGER_WINDOW as i64 - 1) * 86_400_000);
}

#[test]
fn test_band_width_is_four_sample_std() {
    let closes = [601.0, 598.0, 612.0, 605.0, 596.0, 603.0, 610.0, 599.0];
    let series = closes_series(&closes);

    for point in compute_bands(&series, 5) {
        let std_from_width = point.width() / (2.0 * BOLLINGER_MULTIPLIER);
        assert!((point.upper - (point.middle + 2.0 * std_from_width)).abs() < EPS);
        assert!((point.lower - (point.middle - 2.0 * std_from_width)).abs() < EPS);
    }
}

#[test]
fn test_band_sample_std_divisor() {
    // Closes 2, 4, 4, 4, 5, 5, 7, 9: mean 5, sum of squares 32,
    // sample variance 32/7.
    let closes = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
    let series = closes_series(&closes);
    let bands = compute_bands(&series, 8);

    assert_eq!(bands.len(), 1);
    let expected_std = (32.0_f64 / 7.0).sqrt();
    assert!((bands[0].middle - 5.0).abs() < EPS);
    assert!((bands[0].width() - 4.0 * expected_std).abs() < EPS);
}

#[test]
fn test_bands_empty_for_short_series() {
    let series = closes_series(&[600.0; 19]);
    assert!(compute_bands(&series, BOLLINGER_WINDOW).is_empty());
}

#[test]
fn test_breakout_target_formula() {
    let series = daily_series(&[
        (102.0, 98.0, 100.0),
        (104.0, 97.0, 103.0),
        (103.0, 99.0, 101.0),
    ]);
    // Range 104 - 97 = 7 over these three bars.
    let expected = 101.0 + 7.0 * BREAKOUT_MULTIPLIER;
    assert!((breakout_target(&series).unwrap() - expected).abs() < EPS);
}

#[test]
fn test_breakout_target_monotone_in_range() {
    let base = daily_series(&[(102.0, 98.0, 100.0), (102.0, 98.0, 100.0)]);
    let wider = daily_series(&[(110.0, 90.0, 100.0), (102.0, 98.0, 100.0)]);
    assert!(breakout_target(&wider).unwrap() > breakout_target(&base).unwrap());
}

#[test]
fn test_breakout_target_monotone_in_close() {
    // Same trailing range, higher last close, higher target.
    let lower_close = daily_series(&[(110.0, 90.0, 100.0), (105.0, 95.0, 100.0)]);
    let higher_close = daily_series(&[(110.0, 90.0, 100.0), (105.0, 95.0, 104.0)]);
    let delta = breakout_target(&higher_close).unwrap() - breakout_target(&lower_close).unwrap();
    assert!((delta - 4.0).abs() < EPS);
}

#[test]
fn test_breakout_window_caps_lookback() {
    // 21st bar back holds an extreme; must not influence the target.
    let mut rows = vec![(999.0, 1.0, 100.0)];
    for _ in 0..BREAKOUT_WINDOW {
        rows.push((101.0, 99.0, 100.0));
    }
    let series = daily_series(&rows);
    let expected = 100.0 + 2.0 * BREAKOUT_MULTIPLIER;
    assert!((breakout_target(&series).unwrap() - expected).abs() < EPS);
}

#[test]
fn test_breakout_none_only_when_empty() {
    assert!(breakout_target(&PriceSeries::empty("2330", Interval::OneDay)).is_none());
    let one = daily_series(&[(102.0, 98.0, 100.0)]);
    assert!(breakout_target(&one).is_some());
}

#[test]
fn test_deduction_points_offsets() {
    let rows: Vec<(f64, f64, f64)> = (0..70)
        .map(|i| (101.0 + i as f64, 99.0, 100.0 + i as f64))
        .collect();
    let series = daily_series(&rows);

    let points = deduction_points(&series);
    assert_eq!(points.len(), 2);

    // 70 bars: offset 20 hits index 49, offset 60 hits index 9.
    assert_eq!(points[0].offset, 20);
    assert!((points[0].close - 149.0).abs() < EPS);
    assert_eq!(points[1].offset, 60);
    assert!((points[1].close - 109.0).abs() < EPS);
}

#[test]
fn test_deduction_point_out_of_range() {
    let series = closes_series(&[600.0; 30]);
    assert!(deduction_point(&series, 29).is_some());
    assert!(deduction_point(&series, 30).is_none());
    assert_eq!(deduction_points(&series).len(), 1);
}
