//! stockpivot Market Data Crate
//!
//! This crate provides provider-agnostic market data fetching for the
//! stockpivot service.
//!
//! # Architecture
//!
//! ```text
//! +------------------+
//! |  caller's name   |  ("reliance", "nifty")
//! +------------------+
//!          |
//!          v
//! +------------------+
//! |    Resolver      |  (SymbolKind: Equity | Index)
//! +------------------+
//!          |
//!          v
//! +-------------------+
//! | ProviderInstrument|  (provider-specific: RELIANCE.NS, ^NSEI)
//! +-------------------+
//!          |
//!          v
//! +------------------+
//! |    Provider      |  (Yahoo)
//! +------------------+
//!          |
//!          v
//! +------------------+
//! | Quote / Profile  |  (daily bars, quote summary)
//! +------------------+
//! ```
//!
//! # Core Types
//!
//! - [`SymbolKind`] - Equity or index lookup strategy
//! - [`ProviderInstrument`] - Provider-specific lookup parameters
//! - [`Quote`] - Daily OHLCV bar
//! - [`AssetProfile`] - Provider-sourced name, market cap and 52-week range

pub mod errors;
pub mod models;
pub mod provider;
pub mod resolver;

pub use errors::MarketDataError;

// Re-export all public types from models
pub use models::{AssetProfile, ProviderInstrument, ProviderSymbol, Quote, SymbolKind};

// Re-export resolver types
pub use resolver::{
    index_symbol, is_known_index, RulesResolver, SymbolResolver, DEFAULT_MARKET_SUFFIX,
};

// Re-export provider types
pub use provider::yahoo::YahooProvider;
pub use provider::MarketDataProvider;
