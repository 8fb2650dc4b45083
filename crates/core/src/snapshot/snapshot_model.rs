use serde::{Deserialize, Serialize};

use stockpivot_market_data::SymbolKind;

use crate::pivots::PivotLevels;

/// One crore (10 million), the unit market caps are reported in.
pub const CRORE: f64 = 1e7;

/// Point-in-time view of a stock or index with its pivot levels.
///
/// Serialized flat: the pivot fields sit next to the price fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockSnapshot {
    pub real_time_price: f64,
    pub open_price: Option<f64>,
    pub high: Option<f64>,
    pub low: Option<f64>,
    pub volume: Option<u64>,
    pub fifty_two_week_high: Option<f64>,
    pub fifty_two_week_low: Option<f64>,
    pub market_cap_in_crores: Option<f64>,
    /// Provider display name, falling back to the resolved symbol.
    pub stock_full_name: String,
    /// Name exactly as the caller supplied it.
    pub stock_name: String,
    /// Resolved provider symbol (e.g. `RELIANCE.NS`).
    pub symbol: String,
    pub kind: SymbolKind,
    pub previous_close: f64,
    #[serde(flatten)]
    pub levels: PivotLevels,
}

/// Converts a market cap in rupees to crores.
pub fn to_crores(market_cap: f64) -> f64 {
    market_cap / CRORE
}
