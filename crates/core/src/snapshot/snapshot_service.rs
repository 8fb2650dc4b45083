//! Snapshot service implementation.
//!
//! Resolves a caller-supplied name, fetches the two most recent sessions, the
//! current session and the quote summary concurrently, then runs the pivot
//! calculator over the result.

use async_trait::async_trait;
use log::{debug, warn};
use std::sync::Arc;

use stockpivot_market_data::{
    AssetProfile, MarketDataProvider, ProviderInstrument, Quote, SymbolKind, SymbolResolver,
};

use super::snapshot_model::{to_crores, StockSnapshot};
use super::snapshot_traits::SnapshotServiceTrait;
use crate::errors::{Error, Result};
use crate::pivots::calculate_pivot_levels;

/// Sessions fetched to find the previous close.
const PREVIOUS_CLOSE_SESSIONS: u32 = 2;
/// Sessions fetched for the live bar.
const CURRENT_SESSIONS: u32 = 1;

/// Service assembling [`StockSnapshot`]s from a market data provider.
pub struct SnapshotService {
    provider: Arc<dyn MarketDataProvider>,
    resolver: Arc<dyn SymbolResolver>,
}

impl SnapshotService {
    pub fn new(provider: Arc<dyn MarketDataProvider>, resolver: Arc<dyn SymbolResolver>) -> Self {
        Self { provider, resolver }
    }

    fn previous_close(symbol: &str, bars: &[Quote]) -> Result<f64> {
        let required = PREVIOUS_CLOSE_SESSIONS as usize;
        if bars.len() < required {
            return Err(Error::InsufficientHistory {
                symbol: symbol.to_string(),
                required,
                available: bars.len(),
            });
        }
        Ok(bars[bars.len() - required].close)
    }

    fn current_bar<'a>(symbol: &str, bars: &'a [Quote]) -> Result<&'a Quote> {
        bars.last().ok_or_else(|| Error::InsufficientHistory {
            symbol: symbol.to_string(),
            required: CURRENT_SESSIONS as usize,
            available: 0,
        })
    }

    fn assemble(
        name: &str,
        instrument: &ProviderInstrument,
        previous_close: f64,
        current: &Quote,
        profile: AssetProfile,
    ) -> Result<StockSnapshot> {
        let levels = calculate_pivot_levels(previous_close, current.close)?;
        let symbol = instrument.symbol().to_string();

        Ok(StockSnapshot {
            real_time_price: current.close,
            open_price: current.open,
            high: current.high,
            low: current.low,
            volume: current.volume,
            fifty_two_week_high: profile.week_52_high,
            fifty_two_week_low: profile.week_52_low,
            market_cap_in_crores: profile.market_cap.map(to_crores),
            stock_full_name: profile.name.unwrap_or_else(|| symbol.clone()),
            stock_name: name.to_string(),
            symbol,
            kind: instrument.kind(),
            previous_close,
            levels,
        })
    }
}

#[async_trait]
impl SnapshotServiceTrait for SnapshotService {
    async fn get_snapshot(&self, name: &str, kind: Option<SymbolKind>) -> Result<StockSnapshot> {
        if name.trim().is_empty() {
            return Err(Error::MissingSymbol);
        }

        let kind = kind.unwrap_or_else(|| SymbolKind::classify(name));
        let instrument = self.resolver.resolve(name, kind)?;
        let symbol = instrument.symbol();
        debug!(
            "Fetching snapshot for '{}' as {} via {}",
            name,
            instrument,
            self.provider.id()
        );

        let (history, current, profile) = tokio::try_join!(
            self.provider
                .get_recent_quotes(&instrument, PREVIOUS_CLOSE_SESSIONS),
            self.provider.get_recent_quotes(&instrument, CURRENT_SESSIONS),
            self.provider.get_profile(&instrument),
        )
        .map_err(|e| {
            if e.is_client_error() {
                debug!("No market data for {}: {}", symbol, e);
            } else {
                warn!("Market data fetch failed for {}: {}", symbol, e);
            }
            e
        })?;

        let previous_close = Self::previous_close(symbol, &history)?;
        let current = Self::current_bar(symbol, &current)?;

        Self::assemble(name, &instrument, previous_close, current, profile)
    }
}
