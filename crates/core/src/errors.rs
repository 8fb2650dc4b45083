//! Core error types for the stockpivot service.

use thiserror::Error;

use crate::pivots::PivotError;
use stockpivot_market_data::MarketDataError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for snapshot assembly.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Stock name not provided")]
    MissingSymbol,

    #[error(
        "Not enough price history for {symbol}: need {required} session(s), got {available}"
    )]
    InsufficientHistory {
        symbol: String,
        required: usize,
        available: usize,
    },

    #[error("Pivot calculation failed: {0}")]
    Pivot(#[from] PivotError),

    #[error("Market data operation failed: {0}")]
    MarketData(#[from] MarketDataError),
}
