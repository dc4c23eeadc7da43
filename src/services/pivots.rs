//! CDP pivot arithmetic.
//!
//! The Central Determination Price method takes the prior completed
//! session's high/low/close and projects a pivot plus four bands around it,
//! read as tomorrow's reference support and resistance.

use crate::types::{PivotLevels, PriceBar, PriceSeries};

/// Compute the five CDP levels from one reference bar's values.
///
/// Pure and total. For any well-formed bar (H ≥ L) the result satisfies
/// AH ≥ NH ≥ CDP ≥ NL ≥ AL; a flat bar (H == L == C) collapses all five
/// levels onto C.
pub fn compute_pivots(high: f64, low: f64, close: f64) -> PivotLevels {
    let cdp = (high + low + 2.0 * close) / 4.0;
    let range = high - low;
    PivotLevels {
        ah: cdp + range,
        nh: 2.0 * cdp - low,
        cdp,
        nl: 2.0 * cdp - high,
        al: cdp - range,
    }
}

/// Select the bar the pivots must be computed from: the last *completed*
/// period, i.e. the second-to-last bar when the series ends in a live,
/// still-forming bar.
///
/// A one-bar series reuses that bar as its own reference. That is
/// self-referential and known-imprecise, but it is what every variant of
/// the original tool did on listing day; kept as a documented degenerate
/// case rather than silently inventing different behavior.
pub fn reference_bar(series: &PriceSeries) -> Option<&PriceBar> {
    let bars = series.bars();
    match bars.len() {
        0 => None,
        1 => bars.first(),
        n => bars.get(n - 2),
    }
}

/// Pivots for a series: reference-bar selection plus the arithmetic.
pub fn pivots_for(series: &PriceSeries) -> Option<(PivotLevels, PriceBar)> {
    let bar = reference_bar(series)?;
    Some((compute_pivots(bar.high, bar.low, bar.close), *bar))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Interval;

    fn bar(time: i64, high: f64, low: f64, close: f64) -> PriceBar {
        PriceBar {
            time,
            open: close,
            high,
            low,
            close,
            volume: 1_000.0,
        }
    }

    #[test]
    fn test_reference_example() {
        let levels = compute_pivots(100.0, 80.0, 90.0);
        assert_eq!(levels.cdp, 90.0);
        assert_eq!(levels.ah, 110.0);
        assert_eq!(levels.nh, 100.0);
        assert_eq!(levels.nl, 80.0);
        assert_eq!(levels.al, 70.0);
    }

    #[test]
    fn test_flat_bar_collapses() {
        for c in [0.5, 23.15, 607.0] {
            let levels = compute_pivots(c, c, c);
            assert_eq!(levels.entries().map(|(_, v)| v), [c; 5]);
        }
    }

    #[test]
    fn test_ordering_holds_when_high_at_least_low() {
        let cases = [
            (100.0, 80.0, 90.0),
            (100.0, 80.0, 100.0),
            (100.0, 80.0, 80.0),
            (612.0, 598.5, 601.0),
            (0.02, 0.01, 0.015),
            (50.0, 50.0, 50.0),
        ];
        for (h, l, c) in cases {
            let levels = compute_pivots(h, l, c);
            assert!(levels.is_ordered(), "ordering broken for H={} L={} C={}", h, l, c);
        }
    }

    #[test]
    fn test_reference_bar_skips_live_bar() {
        let series = PriceSeries::from_bars(
            "2330.TW",
            Interval::OneDay,
            vec![
                bar(1, 100.0, 90.0, 95.0),
                bar(2, 105.0, 95.0, 100.0),
                bar(3, 110.0, 100.0, 101.0),
            ],
        );
        // Bar 3 is the in-progress session; bar 2 is the completed one.
        assert_eq!(reference_bar(&series).map(|b| b.time), Some(2));
    }

    #[test]
    fn test_single_bar_is_its_own_reference() {
        let series = PriceSeries::from_bars(
            "2330.TW",
            Interval::OneDay,
            vec![bar(1, 100.0, 90.0, 95.0)],
        );
        assert_eq!(reference_bar(&series).map(|b| b.time), Some(1));
    }

    #[test]
    fn test_empty_series_has_no_reference() {
        let series = PriceSeries::empty("2330", Interval::OneDay);
        assert!(reference_bar(&series).is_none());
        assert!(pivots_for(&series).is_none());
    }
}
