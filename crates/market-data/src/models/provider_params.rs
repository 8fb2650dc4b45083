use std::fmt;

use serde::{Deserialize, Serialize};

use super::instrument::SymbolKind;
use super::types::ProviderSymbol;

/// Provider-specific instrument parameters.
/// Produced by the resolver, consumed by providers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ProviderInstrument {
    /// Equity with provider-specific suffix (Yahoo: "RELIANCE.NS")
    EquitySymbol { symbol: ProviderSymbol },

    /// Index symbol (Yahoo: "^NSEI")
    IndexSymbol { symbol: ProviderSymbol },
}

impl ProviderInstrument {
    /// The symbol string to send to the provider.
    pub fn symbol(&self) -> &str {
        match self {
            Self::EquitySymbol { symbol } | Self::IndexSymbol { symbol } => symbol,
        }
    }

    pub fn kind(&self) -> SymbolKind {
        match self {
            Self::EquitySymbol { .. } => SymbolKind::Equity,
            Self::IndexSymbol { .. } => SymbolKind::Index,
        }
    }
}

impl fmt::Display for ProviderInstrument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
