//! Pivot levels module - square-root resistance/support levels.

mod pivots_calculator;
mod pivots_errors;
mod pivots_model;

pub use pivots_calculator::{calculate_pivot_levels, PIVOT_OFFSETS};
pub use pivots_errors::PivotError;
pub use pivots_model::{PivotLevels, PriceQuote};
