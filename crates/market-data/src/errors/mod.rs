//! Error types for the market data crate.
//!
//! [`MarketDataError`] covers symbol resolution and provider failures. The
//! HTTP layer maps each variant to a status code, so variants are split by
//! who is at fault: the caller (bad or unknown symbol) or the provider.

use thiserror::Error;

/// Errors that can occur during market data operations.
#[derive(Error, Debug)]
pub enum MarketDataError {
    /// The requested symbol was not found by the provider.
    /// This is a terminal error - retrying won't help.
    #[error("Symbol not found: {0}")]
    SymbolNotFound(String),

    /// The caller supplied a symbol that cannot be resolved at all
    /// (empty, whitespace only, or otherwise malformed).
    #[error("Invalid symbol: {0}")]
    InvalidSymbol(String),

    /// No data available for the requested window.
    /// The symbol exists but has no quotes in the specified period.
    #[error("No data for date range")]
    NoDataForRange,

    /// The request to the provider timed out.
    #[error("Timeout: {provider}")]
    Timeout {
        /// The provider that timed out
        provider: String,
    },

    /// A provider-specific error occurred.
    #[error("Provider error: {provider} - {message}")]
    ProviderError {
        /// The provider that returned the error
        provider: String,
        /// The error message from the provider
        message: String,
    },

    /// Data validation failed.
    /// The provider returned data that failed validation checks.
    #[error("Validation failed: {message}")]
    ValidationFailed {
        /// Description of the validation failure
        message: String,
    },

    /// A network error occurred while communicating with a provider.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl MarketDataError {
    /// Returns true when the error was caused by the caller's input rather
    /// than by the provider.
    ///
    /// ```
    /// use stockpivot_market_data::errors::MarketDataError;
    ///
    /// assert!(MarketDataError::SymbolNotFound("XYZ.NS".into()).is_client_error());
    /// assert!(!MarketDataError::NoDataForRange.is_client_error());
    /// ```
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::SymbolNotFound(_) | Self::InvalidSymbol(_))
    }
}
