//! Rules resolver - deterministic name->symbol resolution.
//!
//! Equities get the configured market suffix appended; indices go through
//! the alias table.

use std::sync::Arc;

use tracing::debug;

use crate::errors::MarketDataError;
use crate::models::{ProviderInstrument, SymbolKind};

use super::index_aliases::index_symbol;
use super::traits::SymbolResolver;

/// Suffix Yahoo uses for the National Stock Exchange of India.
pub const DEFAULT_MARKET_SUFFIX: &str = ".NS";

/// Resolves provider instruments from deterministic rules.
///
/// - Equities: `RELIANCE` -> `RELIANCE.NS`. Names that already carry an
///   exchange suffix (`TCS.BO`) are passed through uppercased.
/// - Indices: `NIFTY` -> `^NSEI` via the alias table. Names starting with
///   `^` are passed through.
#[derive(Clone, Debug)]
pub struct RulesResolver {
    market_suffix: String,
}

impl Default for RulesResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl RulesResolver {
    /// Create a resolver that appends [`DEFAULT_MARKET_SUFFIX`].
    pub fn new() -> Self {
        Self::with_market_suffix(DEFAULT_MARKET_SUFFIX)
    }

    /// Create a resolver with a custom market suffix (e.g. ".BO").
    pub fn with_market_suffix(suffix: impl Into<String>) -> Self {
        Self {
            market_suffix: suffix.into(),
        }
    }

    pub fn market_suffix(&self) -> &str {
        &self.market_suffix
    }

    fn resolve_equity(&self, name: &str) -> ProviderInstrument {
        let ticker = name.to_uppercase();
        let symbol = if ticker.contains('.') || ticker.starts_with('^') {
            ticker
        } else {
            format!("{}{}", ticker, self.market_suffix)
        };
        ProviderInstrument::EquitySymbol {
            symbol: Arc::from(symbol),
        }
    }

    fn resolve_index(&self, name: &str) -> Result<ProviderInstrument, MarketDataError> {
        if name.starts_with('^') {
            return Ok(ProviderInstrument::IndexSymbol {
                symbol: Arc::from(name.to_uppercase()),
            });
        }

        let symbol =
            index_symbol(name).ok_or_else(|| MarketDataError::SymbolNotFound(name.to_string()))?;
        Ok(ProviderInstrument::IndexSymbol {
            symbol: Arc::from(symbol),
        })
    }
}

impl SymbolResolver for RulesResolver {
    fn resolve(
        &self,
        name: &str,
        kind: SymbolKind,
    ) -> Result<ProviderInstrument, MarketDataError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(MarketDataError::InvalidSymbol(name.to_string()));
        }

        let instrument = match kind {
            SymbolKind::Equity => self.resolve_equity(trimmed),
            SymbolKind::Index => self.resolve_index(trimmed)?,
        };
        debug!("Resolved '{}' ({}) to {}", trimmed, kind, instrument);
        Ok(instrument)
    }
}
