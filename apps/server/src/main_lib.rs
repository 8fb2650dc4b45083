use std::sync::Arc;

use crate::{
    auth::ApiKeyStore,
    config::{Config, LogFormat},
};
use stockpivot_core::snapshot::{SnapshotService, SnapshotServiceTrait};
use stockpivot_market_data::{MarketDataProvider, RulesResolver, YahooProvider};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub struct AppState {
    pub snapshot_service: Arc<dyn SnapshotServiceTrait>,
    pub api_keys: ApiKeyStore,
}

impl AppState {
    /// Wires the snapshot service around `provider`.
    pub fn with_provider(config: &Config, provider: Arc<dyn MarketDataProvider>) -> Arc<Self> {
        let resolver = Arc::new(RulesResolver::with_market_suffix(
            config.market_suffix.clone(),
        ));
        Arc::new(Self {
            snapshot_service: Arc::new(SnapshotService::new(provider, resolver)),
            api_keys: config.api_keys.clone(),
        })
    }
}

pub fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_current_span(false))
            .init(),
        LogFormat::Text => registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init(),
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let provider: Arc<dyn MarketDataProvider> = Arc::new(YahooProvider::new()?);
    tracing::info!(
        "Market data provider {} ready ({} API key(s), suffix {})",
        provider.id(),
        config.api_keys.len(),
        config.market_suffix
    );
    Ok(AppState::with_provider(config, provider))
}
