use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::resolver::is_known_index;

/// How a caller-supplied name should be looked up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SymbolKind {
    /// Listed stock, resolved by appending the market suffix (e.g. `RELIANCE.NS`)
    #[default]
    Equity,
    /// Market index, resolved through the alias table (e.g. `NIFTY` -> `^NSEI`)
    Index,
}

impl SymbolKind {
    /// Infer the kind from a raw name.
    ///
    /// Names starting with `^` or matching a known index alias are indices;
    /// everything else is treated as an equity.
    pub fn classify(name: &str) -> Self {
        let trimmed = name.trim();
        if trimmed.starts_with('^') || is_known_index(trimmed) {
            Self::Index
        } else {
            Self::Equity
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Equity => "equity",
            Self::Index => "index",
        }
    }
}

impl fmt::Display for SymbolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SymbolKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "equity" | "stock" => Ok(Self::Equity),
            "index" => Ok(Self::Index),
            other => Err(format!("Unknown symbol kind: {}", other)),
        }
    }
}
