//! Market data provider trait definitions.
//!
//! This module defines the core `MarketDataProvider` trait that all
//! market data providers must implement.

use async_trait::async_trait;

use crate::errors::MarketDataError;
use crate::models::{AssetProfile, ProviderInstrument, Quote};

/// Trait for market data providers.
///
/// Implement this trait to add support for a new market data source, or to
/// stub one out in tests.
///
/// # Example
///
/// ```ignore
/// use async_trait::async_trait;
/// use stockpivot_market_data::provider::MarketDataProvider;
///
/// struct FixedProvider;
///
/// #[async_trait]
/// impl MarketDataProvider for FixedProvider {
///     fn id(&self) -> &'static str {
///         "FIXED"
///     }
///
///     // ... implement quote and profile methods
/// }
/// ```
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Unique identifier for this provider.
    ///
    /// Should be a constant string like "YAHOO".
    /// Used for logging and error messages.
    fn id(&self) -> &'static str;

    /// Fetch daily bars for the most recent trading sessions.
    ///
    /// # Arguments
    ///
    /// * `instrument` - The provider-specific instrument parameters (already resolved)
    /// * `sessions` - Number of trading sessions to cover (e.g. 2 for today and
    ///   the previous session)
    ///
    /// # Returns
    ///
    /// Bars ordered by timestamp ascending. The last bar is the current
    /// (possibly still open) session.
    async fn get_recent_quotes(
        &self,
        instrument: &ProviderInstrument,
        sessions: u32,
    ) -> Result<Vec<Quote>, MarketDataError>;

    /// Fetch asset profile information (name, market cap, 52-week range).
    async fn get_profile(
        &self,
        instrument: &ProviderInstrument,
    ) -> Result<AssetProfile, MarketDataError>;
}
