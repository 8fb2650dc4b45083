//! Square-root pivot calculation.
//!
//! Levels are placed at fixed offsets around the square root of the previous
//! close, then squared back into price space:
//!
//! ```text
//! base         = sqrt(previous_close)
//! resistance_k = (base + k)^2
//! support_k    = (base - k)^2        k in {0.125, 0.25, 0.5}
//! ```

use super::pivots_errors::PivotError;
use super::pivots_model::{PivotLevels, PriceQuote};

/// Offsets applied to `sqrt(previous_close)`, nearest level first.
pub const PIVOT_OFFSETS: [f64; 3] = [0.125, 0.25, 0.5];

/// Compute pivot levels and the percentage change since the previous close.
///
/// Fails with [`PivotError::InvalidInput`] when `previous_close` is zero,
/// negative or not finite, when `real_time_price` is not finite, or when any
/// computed value overflows to infinity. No rounding is applied.
///
/// ```
/// use stockpivot_core::pivots::calculate_pivot_levels;
///
/// let levels = calculate_pivot_levels(100.0, 110.0).unwrap();
/// assert_eq!(levels.resistance3, 110.25);
/// assert_eq!(levels.support3, 90.25);
/// assert!(calculate_pivot_levels(0.0, 110.0).is_err());
/// ```
pub fn calculate_pivot_levels(
    previous_close: f64,
    real_time_price: f64,
) -> Result<PivotLevels, PivotError> {
    if !previous_close.is_finite() {
        return Err(PivotError::InvalidInput(format!(
            "previous close must be finite, got {}",
            previous_close
        )));
    }
    if previous_close <= 0.0 {
        return Err(PivotError::InvalidInput(format!(
            "previous close must be greater than zero, got {}",
            previous_close
        )));
    }
    if !real_time_price.is_finite() {
        return Err(PivotError::InvalidInput(format!(
            "real-time price must be finite, got {}",
            real_time_price
        )));
    }

    let base = previous_close.sqrt();
    let [r1, r2, r3] = PIVOT_OFFSETS.map(|k| (base + k).powi(2));
    let [s1, s2, s3] = PIVOT_OFFSETS.map(|k| (base - k).powi(2));

    let levels = PivotLevels {
        resistance1: r1,
        resistance2: r2,
        resistance3: r3,
        support1: s1,
        support2: s2,
        support3: s3,
        percentage_change: percentage_change(previous_close, real_time_price),
    };

    // Finite inputs can still overflow, e.g. a subnormal close as divisor.
    if !levels.is_finite() {
        return Err(PivotError::InvalidInput(format!(
            "pivot levels overflow for previous close {} and real-time price {}",
            previous_close, real_time_price
        )));
    }

    Ok(levels)
}

/// Relative move of `real_time_price` against `previous_close`, in percent.
///
/// Callers must have validated `previous_close`; see [`calculate_pivot_levels`].
fn percentage_change(previous_close: f64, real_time_price: f64) -> f64 {
    (real_time_price - previous_close) / previous_close * 100.0
}

impl PriceQuote {
    /// Convenience wrapper around [`calculate_pivot_levels`].
    pub fn pivot_levels(&self) -> Result<PivotLevels, PivotError> {
        calculate_pivot_levels(self.previous_close, self.real_time_price)
    }
}
