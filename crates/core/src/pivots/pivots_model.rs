use serde::{Deserialize, Serialize};

/// Prices the pivot calculation starts from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceQuote {
    /// Prior session's closing price. Must be > 0.
    pub previous_close: f64,
    /// Current/latest price.
    pub real_time_price: f64,
}

impl PriceQuote {
    pub fn new(previous_close: f64, real_time_price: f64) -> Self {
        Self {
            previous_close,
            real_time_price,
        }
    }
}

/// Resistance/support levels and percentage change derived from a
/// [`PriceQuote`]. Values are unrounded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PivotLevels {
    pub resistance1: f64,
    pub resistance2: f64,
    pub resistance3: f64,
    pub support1: f64,
    pub support2: f64,
    pub support3: f64,
    pub percentage_change: f64,
}

impl PivotLevels {
    /// Resistance levels, nearest first.
    pub fn resistances(&self) -> [f64; 3] {
        [self.resistance1, self.resistance2, self.resistance3]
    }

    /// Support levels, nearest first.
    pub fn supports(&self) -> [f64; 3] {
        [self.support1, self.support2, self.support3]
    }

    /// True when every level and the percentage change are finite numbers.
    pub fn is_finite(&self) -> bool {
        self.resistances()
            .into_iter()
            .chain(self.supports())
            .all(f64::is_finite)
            && self.percentage_change.is_finite()
    }
}
