use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Daily market data bar
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    /// Timestamp of the bar
    pub timestamp: DateTime<Utc>,

    /// Opening price
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open: Option<f64>,

    /// Session high
    #[serde(skip_serializing_if = "Option::is_none")]
    pub high: Option<f64>,

    /// Session low
    #[serde(skip_serializing_if = "Option::is_none")]
    pub low: Option<f64>,

    /// Closing/current price (required)
    pub close: f64,

    /// Trading volume
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume: Option<u64>,

    /// Source of the quote (YAHOO, ...)
    pub source: String,
}

impl Quote {
    /// Create a full OHLCV quote
    pub fn ohlcv(
        timestamp: DateTime<Utc>,
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        volume: u64,
        source: String,
    ) -> Self {
        Self {
            timestamp,
            open: Some(open),
            high: Some(high),
            low: Some(low),
            close,
            volume: Some(volume),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_ohlcv() {
        let quote = Quote::ohlcv(
            Utc::now(),
            148.0,
            152.0,
            147.5,
            150.25,
            1_000_000,
            "YAHOO".to_string(),
        );
        assert_eq!(quote.open, Some(148.0));
        assert_eq!(quote.high, Some(152.0));
        assert_eq!(quote.low, Some(147.5));
        assert_eq!(quote.close, 150.25);
        assert_eq!(quote.volume, Some(1_000_000));
    }

    #[test]
    fn test_quote_skips_missing_fields() {
        let quote = Quote {
            timestamp: Utc::now(),
            open: None,
            high: None,
            low: None,
            close: 10.0,
            volume: None,
            source: "YAHOO".to_string(),
        };
        let json = serde_json::to_string(&quote).unwrap();
        assert!(!json.contains("open"));
        assert!(!json.contains("volume"));
    }
}
