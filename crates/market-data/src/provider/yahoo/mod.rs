//! Yahoo Finance market data provider.
//!
//! This provider uses the Yahoo Finance API to fetch:
//! - Daily bars for NSE/BSE equities (e.g., RELIANCE.NS)
//! - Daily bars for indices (e.g., ^NSEI)
//! - quoteSummary profile data (name, market cap, 52-week range)

mod models;

use std::future::Future;
use std::sync::RwLock;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use lazy_static::lazy_static;
use reqwest::header;
use tracing::{debug, warn};
use urlencoding::encode;
use yahoo_finance_api as yahoo;

use crate::errors::MarketDataError;
use crate::models::{AssetProfile, ProviderInstrument, Quote};
use crate::provider::MarketDataProvider;

use models::{raw, YahooQuoteSummaryResponse, YahooQuoteSummaryResult};

const PROVIDER_ID: &str = "YAHOO";
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

// ============================================================================
// Crumb/Cookie Authentication
// ============================================================================

/// Cached Yahoo authentication data
#[derive(Debug, Clone)]
struct CrumbData {
    cookie: String,
    crumb: String,
}

lazy_static! {
    /// Global cache for Yahoo authentication crumb
    static ref YAHOO_CRUMB: RwLock<Option<CrumbData>> = RwLock::default();
}

fn provider_error(message: impl Into<String>) -> MarketDataError {
    MarketDataError::ProviderError {
        provider: PROVIDER_ID.to_string(),
        message: message.into(),
    }
}

// ============================================================================
// Yahoo Provider
// ============================================================================

/// Yahoo Finance market data provider.
pub struct YahooProvider {
    connector: yahoo::YahooConnector,
    client: reqwest::Client,
    timeout: Duration,
}

impl YahooProvider {
    /// Create a new Yahoo Finance provider with the default request timeout.
    pub fn new() -> Result<Self, MarketDataError> {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    /// Create a new Yahoo Finance provider with a per-call timeout.
    pub fn with_timeout(timeout: Duration) -> Result<Self, MarketDataError> {
        let connector = yahoo::YahooConnector::new()
            .map_err(|e| provider_error(format!("Failed to initialize Yahoo connector: {}", e)))?;
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self {
            connector,
            client,
            timeout,
        })
    }

    /// Run a provider call, mapping an elapsed deadline to `Timeout`.
    async fn with_deadline<T, F>(&self, fut: F) -> Result<T, MarketDataError>
    where
        F: Future<Output = Result<T, MarketDataError>>,
    {
        tokio::time::timeout(self.timeout, fut)
            .await
            .map_err(|_| MarketDataError::Timeout {
                provider: PROVIDER_ID.to_string(),
            })?
    }

    // ========================================================================
    // Crumb/Cookie Authentication
    // ========================================================================

    /// Ensure we have a valid Yahoo authentication crumb.
    async fn ensure_crumb(&self) -> Result<CrumbData, MarketDataError> {
        {
            let guard = YAHOO_CRUMB.read().unwrap_or_else(|e| e.into_inner());
            if let Some(crumb) = guard.as_ref() {
                return Ok(crumb.clone());
            }
        }

        self.fetch_crumb().await
    }

    /// Fetch a new Yahoo authentication crumb.
    async fn fetch_crumb(&self) -> Result<CrumbData, MarketDataError> {
        // Step 1: Get cookie from fc.yahoo.com
        let response = self
            .client
            .get("https://fc.yahoo.com")
            .send()
            .await
            .map_err(|e| provider_error(format!("Failed to get cookie: {}", e)))?;

        let cookie = response
            .headers()
            .get(header::SET_COOKIE)
            .and_then(|h| h.to_str().ok())
            .and_then(|s| s.split_once(';').map(|(v, _)| v.to_string()))
            .ok_or_else(|| provider_error("Failed to parse Yahoo cookie"))?;

        // Step 2: Get crumb using cookie
        let crumb = self
            .client
            .get("https://query1.finance.yahoo.com/v1/test/getcrumb")
            .header(header::COOKIE, &cookie)
            .send()
            .await
            .map_err(|e| provider_error(format!("Failed to get crumb: {}", e)))?
            .text()
            .await
            .map_err(|e| provider_error(format!("Failed to read crumb: {}", e)))?;

        let crumb_data = CrumbData { cookie, crumb };

        let mut guard = YAHOO_CRUMB.write().unwrap_or_else(|e| e.into_inner());
        *guard = Some(crumb_data.clone());

        Ok(crumb_data)
    }

    /// Clear the cached crumb (used when authentication fails)
    fn clear_crumb(&self) {
        let mut guard = YAHOO_CRUMB.write().unwrap_or_else(|e| e.into_inner());
        *guard = None;
    }

    // ========================================================================
    // Quote Fetching
    // ========================================================================

    /// Convert a Yahoo bar to our Quote model.
    fn yahoo_quote_to_quote(&self, yahoo_quote: yahoo::Quote) -> Result<Quote, MarketDataError> {
        let timestamp: DateTime<Utc> = Utc
            .timestamp_opt(yahoo_quote.timestamp as i64, 0)
            .single()
            .ok_or_else(|| MarketDataError::ValidationFailed {
                message: format!("Invalid timestamp: {}", yahoo_quote.timestamp),
            })?;

        if !yahoo_quote.close.is_finite() {
            return Err(MarketDataError::ValidationFailed {
                message: format!("Non-finite close price at {}", timestamp),
            });
        }

        Ok(Quote {
            timestamp,
            open: finite(yahoo_quote.open),
            high: finite(yahoo_quote.high),
            low: finite(yahoo_quote.low),
            close: yahoo_quote.close,
            volume: u64::try_from(yahoo_quote.volume).ok(),
            source: PROVIDER_ID.to_string(),
        })
    }

    async fn fetch_quote_range(
        &self,
        symbol: &str,
        sessions: u32,
    ) -> Result<Vec<Quote>, MarketDataError> {
        let range = format!("{}d", sessions);
        let response = self
            .connector
            .get_quote_range(symbol, "1d", &range)
            .await
            .map_err(|e| map_yahoo_error(symbol, e))?;

        let yahoo_quotes = match response.quotes() {
            Ok(quotes) => quotes,
            Err(yahoo::YahooError::NoQuotes) => {
                warn!("No quotes returned for '{}' over {}", symbol, range);
                return Err(MarketDataError::NoDataForRange);
            }
            Err(e) => return Err(map_yahoo_error(symbol, e)),
        };

        // Yahoo pads half-formed sessions with NaN closes; skip them
        let quotes: Vec<Quote> = yahoo_quotes
            .into_iter()
            .filter_map(|q| match self.yahoo_quote_to_quote(q) {
                Ok(quote) => Some(quote),
                Err(e) => {
                    warn!("Skipping quote due to conversion error: {:?}", e);
                    None
                }
            })
            .collect();

        if quotes.is_empty() {
            return Err(MarketDataError::NoDataForRange);
        }

        Ok(quotes)
    }

    // ========================================================================
    // Profile Fetching
    // ========================================================================

    /// Fetch profile using the quoteSummary API.
    async fn fetch_quote_summary_profile(
        &self,
        symbol: &str,
    ) -> Result<AssetProfile, MarketDataError> {
        let crumb = self.ensure_crumb().await?;

        let url = format!(
            "https://query1.finance.yahoo.com/v10/finance/quoteSummary/{}?modules=price,summaryDetail&crumb={}",
            encode(symbol),
            encode(&crumb.crumb)
        );

        let response = self
            .client
            .get(&url)
            .header(header::COOKIE, &crumb.cookie)
            .send()
            .await
            .map_err(|e| provider_error(format!("Profile request failed: {}", e)))?;

        if response.status() == reqwest::StatusCode::UNAUTHORIZED {
            self.clear_crumb();
            return Err(provider_error("Yahoo authentication expired"));
        }

        let data: YahooQuoteSummaryResponse = response
            .json()
            .await
            .map_err(|e| provider_error(format!("Failed to parse profile response: {}", e)))?;

        if let Some(error) = data.quote_summary.error {
            debug!(
                "quoteSummary error for {}: {:?} {:?}",
                symbol, error.code, error.description
            );
            return Err(MarketDataError::SymbolNotFound(symbol.to_string()));
        }

        let result = data
            .quote_summary
            .result
            .and_then(|results| results.into_iter().next())
            .ok_or_else(|| MarketDataError::SymbolNotFound(symbol.to_string()))?;

        Ok(map_quote_summary_to_profile(symbol, &result))
    }
}

// ============================================================================
// MarketDataProvider Implementation
// ============================================================================

#[async_trait]
impl MarketDataProvider for YahooProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn get_recent_quotes(
        &self,
        instrument: &ProviderInstrument,
        sessions: u32,
    ) -> Result<Vec<Quote>, MarketDataError> {
        let symbol = instrument.symbol();
        debug!(
            "Fetching {} session(s) of daily bars for {} from Yahoo",
            sessions, symbol
        );
        self.with_deadline(self.fetch_quote_range(symbol, sessions))
            .await
    }

    async fn get_profile(
        &self,
        instrument: &ProviderInstrument,
    ) -> Result<AssetProfile, MarketDataError> {
        let symbol = instrument.symbol();
        debug!("Fetching profile for {} from Yahoo", symbol);
        self.with_deadline(self.fetch_quote_summary_profile(symbol))
            .await
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn finite(value: f64) -> Option<f64> {
    value.is_finite().then_some(value)
}

fn map_yahoo_error(symbol: &str, e: yahoo::YahooError) -> MarketDataError {
    if matches!(e, yahoo::YahooError::NoQuotes | yahoo::YahooError::NoResult) {
        MarketDataError::SymbolNotFound(symbol.to_string())
    } else {
        provider_error(e.to_string())
    }
}

/// Map quoteSummary result to AssetProfile.
fn map_quote_summary_to_profile(symbol: &str, result: &YahooQuoteSummaryResult) -> AssetProfile {
    let price = result.price.as_ref();
    let detail = result.summary_detail.as_ref();

    let name = format_name(
        price.and_then(|p| p.long_name.as_deref()),
        price.and_then(|p| p.short_name.as_deref()),
        symbol,
    );

    // summaryDetail is the usual home of marketCap; price carries it for some listings
    let market_cap = raw(detail.and_then(|d| d.market_cap.as_ref()))
        .or_else(|| raw(price.and_then(|p| p.market_cap.as_ref())));

    AssetProfile {
        name: Some(name),
        market_cap,
        week_52_high: raw(detail.and_then(|d| d.fifty_two_week_high.as_ref())),
        week_52_low: raw(detail.and_then(|d| d.fifty_two_week_low.as_ref())),
    }
}

/// Pick a display name: long name, then short name, then the symbol itself.
fn format_name(long_name: Option<&str>, short_name: Option<&str>, symbol: &str) -> String {
    let pick = |name: Option<&str>| {
        name.map(|n| n.replace("&amp;", "&").trim().to_string())
            .filter(|n| !n.is_empty())
    };
    pick(long_name)
        .or_else(|| pick(short_name))
        .unwrap_or_else(|| symbol.to_string())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use super::models::{YahooPriceData, YahooPriceDetail, YahooSummaryDetail};

    fn detail(value: f64) -> Option<YahooPriceDetail> {
        Some(YahooPriceDetail { raw: Some(value) })
    }

    #[test]
    fn test_format_name() {
        assert_eq!(
            format_name(Some("Larsen &amp; Toubro Limited"), None, "LT.NS"),
            "Larsen & Toubro Limited"
        );
        assert_eq!(
            format_name(None, Some("RELIANCE INDS"), "RELIANCE.NS"),
            "RELIANCE INDS"
        );
        assert_eq!(format_name(Some("  "), None, "TCS.NS"), "TCS.NS");
        assert_eq!(format_name(None, None, "TCS.NS"), "TCS.NS");
    }

    #[test]
    fn test_finite() {
        assert_eq!(finite(1.5), Some(1.5));
        assert_eq!(finite(f64::NAN), None);
        assert_eq!(finite(f64::INFINITY), None);
    }

    #[test]
    fn test_map_quote_summary_to_profile() {
        let result = YahooQuoteSummaryResult {
            price: Some(YahooPriceData {
                short_name: Some("RELIANCE INDS".to_string()),
                long_name: Some("Reliance Industries Limited".to_string()),
                market_cap: None,
            }),
            summary_detail: Some(YahooSummaryDetail {
                market_cap: detail(1.95e13),
                fifty_two_week_high: detail(1608.8),
                fifty_two_week_low: detail(1114.85),
            }),
        };

        let profile = map_quote_summary_to_profile("RELIANCE.NS", &result);
        assert_eq!(profile.name.as_deref(), Some("Reliance Industries Limited"));
        assert_eq!(profile.market_cap, Some(1.95e13));
        assert_eq!(profile.week_52_high, Some(1608.8));
        assert_eq!(profile.week_52_low, Some(1114.85));
    }

    #[test]
    fn test_map_profile_falls_back_to_price_market_cap() {
        let result = YahooQuoteSummaryResult {
            price: Some(YahooPriceData {
                short_name: None,
                long_name: None,
                market_cap: detail(5.0e11),
            }),
            summary_detail: None,
        };

        let profile = map_quote_summary_to_profile("ABC.NS", &result);
        assert_eq!(profile.name.as_deref(), Some("ABC.NS"));
        assert_eq!(profile.market_cap, Some(5.0e11));
        assert_eq!(profile.week_52_high, None);
    }

    #[test]
    fn test_map_yahoo_error_not_found() {
        let err = map_yahoo_error("XYZ.NS", yahoo::YahooError::NoQuotes);
        assert!(matches!(err, MarketDataError::SymbolNotFound(s) if s == "XYZ.NS"));
    }
}
