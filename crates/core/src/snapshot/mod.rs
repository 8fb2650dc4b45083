//! Snapshot module - live price, profile and pivot levels for one symbol.

mod snapshot_model;
mod snapshot_service;
mod snapshot_traits;

#[cfg(test)]
mod service_tests;

pub use snapshot_model::{to_crores, StockSnapshot, CRORE};
pub use snapshot_service::SnapshotService;
pub use snapshot_traits::SnapshotServiceTrait;
