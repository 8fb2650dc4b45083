//! Resolution traits for the market data crate.

use crate::errors::MarketDataError;
use crate::models::{ProviderInstrument, SymbolKind};

/// Main symbol resolver interface.
///
/// Turns a caller-supplied name into the provider-specific instrument the
/// provider should be queried with.
pub trait SymbolResolver: Send + Sync {
    /// Resolve a provider-specific instrument.
    ///
    /// # Arguments
    /// * `name` - The raw name supplied by the caller (e.g. "reliance", "NIFTY")
    /// * `kind` - Whether to resolve it as an equity or an index
    ///
    /// # Returns
    /// * `Ok(instrument)` - Successfully resolved instrument
    /// * `Err(error)` - `InvalidSymbol` for blank input, `SymbolNotFound` for
    ///   an index alias that is not known
    fn resolve(&self, name: &str, kind: SymbolKind)
        -> Result<ProviderInstrument, MarketDataError>;
}
