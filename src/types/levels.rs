use serde::{Deserialize, Serialize};

/// The five CDP-derived support/resistance levels for the next session,
/// computed from one reference bar's high/low/close.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PivotLevels {
    /// Ascending High: strongest resistance.
    pub ah: f64,
    /// Near High: first resistance.
    pub nh: f64,
    /// Central Determination Price: the pivot itself.
    pub cdp: f64,
    /// Near Low: first support.
    pub nl: f64,
    /// Ascending Low: strongest support.
    pub al: f64,
}

impl PivotLevels {
    /// Levels in display order (resistance down to support), paired with
    /// their conventional short names.
    pub fn entries(&self) -> [(&'static str, f64); 5] {
        [
            ("AH", self.ah),
            ("NH", self.nh),
            ("CDP", self.cdp),
            ("NL", self.nl),
            ("AL", self.al),
        ]
    }

    /// Whether the AH ≥ NH ≥ CDP ≥ NL ≥ AL ordering holds. Guaranteed for
    /// any well-formed reference bar; exposed for sanity checks.
    pub fn is_ordered(&self) -> bool {
        self.ah >= self.nh && self.nh >= self.cdp && self.cdp >= self.nl && self.nl >= self.al
    }
}

/// One point of the Bollinger-style envelope: trailing mean and the
/// ±2·std band around it, stamped with the bar time it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BandPoint {
    pub time: i64,
    pub middle: f64,
    pub upper: f64,
    pub lower: f64,
}

impl BandPoint {
    /// Band width, upper minus lower.
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }
}

/// The close exactly `offset` bars before the most recent bar: the value a
/// trailing moving average is about to roll off.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DeductionPoint {
    pub time: i64,
    pub close: f64,
    pub offset: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entries_order() {
        let levels = PivotLevels {
            ah: 110.0,
            nh: 100.0,
            cdp: 90.0,
            nl: 80.0,
            al: 70.0,
        };
        let names: Vec<&str> = levels.entries().iter().map(|(n, _)| *n).collect();
        assert_eq!(names, vec!["AH", "NH", "CDP", "NL", "AL"]);
        assert!(levels.is_ordered());
    }

    #[test]
    fn test_is_ordered_rejects_inversion() {
        let levels = PivotLevels {
            ah: 70.0,
            nh: 100.0,
            cdp: 90.0,
            nl: 80.0,
            al: 110.0,
        };
        assert!(!levels.is_ordered());
    }

    #[test]
    fn test_band_width() {
        let band = BandPoint {
            time: 0,
            middle: 100.0,
            upper: 104.0,
            lower: 96.0,
        };
        assert!((band.width() - 8.0).abs() < 1e-12);
    }
}
