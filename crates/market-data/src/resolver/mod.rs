//! Symbol resolution for market data providers.
//!
//! Converts the name a caller typed into the symbol the provider understands:
//!
//! ```text
//! ("reliance", Equity) ──▶ RulesResolver ──▶ EquitySymbol { "RELIANCE.NS" }
//! ("nifty",    Index)  ──▶ RulesResolver ──▶ IndexSymbol  { "^NSEI" }
//! ```
//!
//! When the caller does not say which kind a name is,
//! [`SymbolKind::classify`](crate::models::SymbolKind::classify) picks one
//! using the same alias table.

mod index_aliases;
mod rules_resolver;
mod traits;

pub use index_aliases::{index_symbol, is_known_index};
pub use rules_resolver::{RulesResolver, DEFAULT_MARKET_SUFFIX};
pub use traits::SymbolResolver;
