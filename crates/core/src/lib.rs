//! stockpivot Core - pivot levels and stock snapshots.
//!
//! This crate holds the business logic of the stockpivot service. Market data
//! comes in through the `MarketDataProvider` trait from
//! `stockpivot-market-data`, so everything here can be exercised against an
//! in-memory provider.

pub mod errors;
pub mod pivots;
pub mod snapshot;

pub use pivots::{calculate_pivot_levels, PivotError, PivotLevels, PriceQuote};
pub use snapshot::{SnapshotService, SnapshotServiceTrait, StockSnapshot};

// Re-export error types
pub use errors::Error;
pub use errors::Result;
