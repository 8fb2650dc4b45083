use async_trait::async_trait;

use stockpivot_market_data::SymbolKind;

use super::snapshot_model::StockSnapshot;
use crate::errors::Result;

/// Trait defining the contract for snapshot assembly.
#[async_trait]
pub trait SnapshotServiceTrait: Send + Sync {
    /// Resolves `name`, fetches its recent sessions and profile, and returns
    /// the snapshot with pivot levels.
    ///
    /// `kind` forces equity or index lookup; `None` classifies the name.
    async fn get_snapshot(&self, name: &str, kind: Option<SymbolKind>) -> Result<StockSnapshot>;
}
