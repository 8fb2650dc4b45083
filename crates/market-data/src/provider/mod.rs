//! Market data provider abstractions and implementations.
//!
//! This module contains:
//! - The `MarketDataProvider` trait that all providers implement
//! - The Yahoo Finance implementation
//!
//! Providers receive pre-resolved `ProviderInstrument` parameters. The
//! resolution from a caller-supplied name to a provider symbol happens in the
//! resolver module, not in the providers themselves.

mod traits;

pub mod yahoo;

// Re-exports
pub use traits::MarketDataProvider;
