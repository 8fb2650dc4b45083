//! Tests for SnapshotService against a scripted market data provider.

#[cfg(test)]
mod tests {
    use crate::errors::Error;
    use crate::snapshot::{SnapshotService, SnapshotServiceTrait};
    use async_trait::async_trait;
    use chrono::{TimeZone, Utc};
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};
    use stockpivot_market_data::{
        AssetProfile, MarketDataError, MarketDataProvider, ProviderInstrument, Quote,
        RulesResolver, SymbolKind,
    };

    // =========================================================================
    // Mock MarketDataProvider
    // =========================================================================

    #[derive(Default)]
    struct MockProvider {
        bars: HashMap<String, Vec<Quote>>,
        profiles: HashMap<String, AssetProfile>,
        fail_with: Option<fn(&str) -> MarketDataError>,
        calls: Mutex<Vec<String>>,
    }

    impl MockProvider {
        fn new() -> Self {
            Self::default()
        }

        fn with_bars(mut self, symbol: &str, bars: Vec<Quote>) -> Self {
            self.bars.insert(symbol.to_string(), bars);
            self
        }

        fn with_profile(mut self, symbol: &str, profile: AssetProfile) -> Self {
            self.profiles.insert(symbol.to_string(), profile);
            self
        }

        fn failing(mut self, make: fn(&str) -> MarketDataError) -> Self {
            self.fail_with = Some(make);
            self
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl MarketDataProvider for MockProvider {
        fn id(&self) -> &'static str {
            "MOCK"
        }

        async fn get_recent_quotes(
            &self,
            instrument: &ProviderInstrument,
            sessions: u32,
        ) -> Result<Vec<Quote>, MarketDataError> {
            let symbol = instrument.symbol();
            self.calls
                .lock()
                .unwrap()
                .push(format!("quotes:{}:{}", symbol, sessions));
            if let Some(make) = self.fail_with {
                return Err(make(symbol));
            }
            let bars = self
                .bars
                .get(symbol)
                .ok_or_else(|| MarketDataError::SymbolNotFound(symbol.to_string()))?;
            let skip = bars.len().saturating_sub(sessions as usize);
            Ok(bars[skip..].to_vec())
        }

        async fn get_profile(
            &self,
            instrument: &ProviderInstrument,
        ) -> Result<AssetProfile, MarketDataError> {
            let symbol = instrument.symbol();
            self.calls.lock().unwrap().push(format!("profile:{}", symbol));
            if let Some(make) = self.fail_with {
                return Err(make(symbol));
            }
            Ok(self.profiles.get(symbol).cloned().unwrap_or_default())
        }
    }

    // =========================================================================
    // Helpers
    // =========================================================================

    fn bar(day: u32, open: f64, high: f64, low: f64, close: f64, volume: u64) -> Quote {
        Quote::ohlcv(
            Utc.with_ymd_and_hms(2024, 3, day, 3, 45, 0).unwrap(),
            open,
            high,
            low,
            close,
            volume,
            "MOCK".to_string(),
        )
    }

    fn reliance_provider() -> MockProvider {
        MockProvider::new()
            .with_bars(
                "RELIANCE.NS",
                vec![
                    bar(11, 96.0, 101.0, 95.0, 98.0, 900_000),
                    bar(12, 98.0, 100.5, 97.0, 100.0, 1_000_000),
                    bar(13, 101.0, 111.0, 99.5, 110.0, 1_200_000),
                ],
            )
            .with_profile(
                "RELIANCE.NS",
                AssetProfile::with_name("Reliance Industries Limited")
                    .market_cap(2.5e11)
                    .week_52_range(80.0, 150.0),
            )
    }

    fn service(provider: Arc<MockProvider>) -> SnapshotService {
        SnapshotService::new(provider, Arc::new(RulesResolver::new()))
    }

    // =========================================================================
    // Tests
    // =========================================================================

    #[tokio::test]
    async fn test_equity_snapshot_is_assembled() {
        let provider = Arc::new(reliance_provider());
        let snapshot = service(provider.clone())
            .get_snapshot("reliance", None)
            .await
            .unwrap();

        assert_eq!(snapshot.stock_name, "reliance");
        assert_eq!(snapshot.symbol, "RELIANCE.NS");
        assert_eq!(snapshot.kind, SymbolKind::Equity);
        assert_eq!(snapshot.stock_full_name, "Reliance Industries Limited");
        assert_eq!(snapshot.previous_close, 100.0);
        assert_eq!(snapshot.real_time_price, 110.0);
        assert_eq!(snapshot.open_price, Some(101.0));
        assert_eq!(snapshot.high, Some(111.0));
        assert_eq!(snapshot.low, Some(99.5));
        assert_eq!(snapshot.volume, Some(1_200_000));
        assert_eq!(snapshot.fifty_two_week_high, Some(150.0));
        assert_eq!(snapshot.fifty_two_week_low, Some(80.0));
        assert_eq!(snapshot.market_cap_in_crores, Some(25_000.0));
        assert_eq!(snapshot.levels.resistance1, 102.515625);
        assert_eq!(snapshot.levels.support3, 90.25);
        assert!((snapshot.levels.percentage_change - 10.0).abs() < 1e-9);

        let calls = provider.calls();
        assert_eq!(calls.len(), 3);
        assert!(calls.contains(&"quotes:RELIANCE.NS:2".to_string()));
        assert!(calls.contains(&"quotes:RELIANCE.NS:1".to_string()));
        assert!(calls.contains(&"profile:RELIANCE.NS".to_string()));
    }

    #[tokio::test]
    async fn test_index_is_classified_and_resolved() {
        let provider = Arc::new(MockProvider::new().with_bars(
            "^NSEI",
            vec![
                bar(12, 22_000.0, 22_100.0, 21_900.0, 22_050.0, 0),
                bar(13, 22_060.0, 22_300.0, 22_000.0, 22_250.0, 0),
            ],
        ));
        let snapshot = service(provider).get_snapshot("nifty", None).await.unwrap();

        assert_eq!(snapshot.kind, SymbolKind::Index);
        assert_eq!(snapshot.symbol, "^NSEI");
        assert_eq!(snapshot.previous_close, 22_050.0);
        // No profile name: falls back to the symbol.
        assert_eq!(snapshot.stock_full_name, "^NSEI");
        assert_eq!(snapshot.market_cap_in_crores, None);
    }

    #[tokio::test]
    async fn test_kind_override_wins_over_classification() {
        let provider = Arc::new(MockProvider::new().with_bars(
            "NIFTY.NS",
            vec![bar(12, 1.0, 1.0, 1.0, 4.0, 10), bar(13, 1.0, 1.0, 1.0, 5.0, 10)],
        ));
        let snapshot = service(provider)
            .get_snapshot("nifty", Some(SymbolKind::Equity))
            .await
            .unwrap();

        assert_eq!(snapshot.symbol, "NIFTY.NS");
        assert_eq!(snapshot.kind, SymbolKind::Equity);
    }

    #[tokio::test]
    async fn test_blank_name_is_missing_symbol() {
        let provider = Arc::new(reliance_provider());
        let err = service(provider.clone())
            .get_snapshot("   ", None)
            .await
            .unwrap_err();

        assert!(matches!(err, Error::MissingSymbol));
        assert!(provider.calls().is_empty());
    }

    #[tokio::test]
    async fn test_unknown_index_alias_is_not_found() {
        let provider = Arc::new(MockProvider::new());
        let err = service(provider)
            .get_snapshot("NOTANINDEX", Some(SymbolKind::Index))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            Error::MarketData(MarketDataError::SymbolNotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_single_session_is_insufficient_history() {
        let provider = Arc::new(
            MockProvider::new().with_bars("NEWLIST.NS", vec![bar(13, 10.0, 11.0, 9.0, 10.5, 5)]),
        );
        let err = service(provider)
            .get_snapshot("newlist", None)
            .await
            .unwrap_err();

        match err {
            Error::InsufficientHistory {
                symbol,
                required,
                available,
            } => {
                assert_eq!(symbol, "NEWLIST.NS");
                assert_eq!(required, 2);
                assert_eq!(available, 1);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_zero_previous_close_surfaces_pivot_error() {
        let provider = Arc::new(MockProvider::new().with_bars(
            "DELISTED.NS",
            vec![bar(12, 0.0, 0.0, 0.0, 0.0, 0), bar(13, 1.0, 1.0, 1.0, 1.0, 0)],
        ));
        let err = service(provider)
            .get_snapshot("delisted", None)
            .await
            .unwrap_err();

        assert!(matches!(err, Error::Pivot(_)));
    }

    #[tokio::test]
    async fn test_provider_failure_is_propagated() {
        let provider = Arc::new(reliance_provider().failing(|_| MarketDataError::Timeout {
            provider: "MOCK".to_string(),
        }));
        let err = service(provider)
            .get_snapshot("reliance", None)
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            Error::MarketData(MarketDataError::Timeout { .. })
        ));
    }
}
