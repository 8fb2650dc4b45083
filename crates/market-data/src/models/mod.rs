//! Market data models
//!
//! This module contains the core data types for market data operations:
//! - `types` - Type aliases for common identifiers (ProviderSymbol)
//! - `instrument` - How a caller-supplied name is looked up (SymbolKind)
//! - `provider_params` - Provider-specific instrument parameters (ProviderInstrument)
//! - `quote` - Daily OHLCV bars (Quote)
//! - `profile` - Quote summary data (AssetProfile)

mod instrument;
mod profile;
mod provider_params;
mod quote;
mod types;

pub use instrument::SymbolKind;
pub use profile::AssetProfile;
pub use provider_params::ProviderInstrument;
pub use quote::Quote;
pub use types::ProviderSymbol;
