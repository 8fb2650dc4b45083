use serde::{Deserialize, Serialize};

/// Asset profile data from market data providers
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AssetProfile {
    /// Company/index display name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Market capitalization in the trading currency
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market_cap: Option<f64>,

    /// 52-week high price
    #[serde(skip_serializing_if = "Option::is_none")]
    pub week_52_high: Option<f64>,

    /// 52-week low price
    #[serde(skip_serializing_if = "Option::is_none")]
    pub week_52_low: Option<f64>,
}

impl AssetProfile {
    /// Create a new empty asset profile
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a profile with basic info
    pub fn with_name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }

    /// Set the market cap
    pub fn market_cap(mut self, market_cap: f64) -> Self {
        self.market_cap = Some(market_cap);
        self
    }

    /// Set the 52-week range
    pub fn week_52_range(mut self, low: f64, high: f64) -> Self {
        self.week_52_low = Some(low);
        self.week_52_high = Some(high);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_profile_builder() {
        let profile = AssetProfile::with_name("Reliance Industries Limited")
            .market_cap(1.9e13)
            .week_52_range(1200.0, 1600.0);

        assert_eq!(profile.name.as_deref(), Some("Reliance Industries Limited"));
        assert_eq!(profile.market_cap, Some(1.9e13));
        assert_eq!(profile.week_52_low, Some(1200.0));
        assert_eq!(profile.week_52_high, Some(1600.0));
    }

    #[test]
    fn test_asset_profile_serialization() {
        let profile = AssetProfile {
            name: Some("Test Company".to_string()),
            ..Default::default()
        };

        let json = serde_json::to_string(&profile).unwrap();
        assert!(json.contains("Test Company"));
        // Optional None fields should not be serialized
        assert!(!json.contains("market_cap"));
    }
}
