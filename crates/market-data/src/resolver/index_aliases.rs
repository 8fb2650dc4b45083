//! Index alias table.
//!
//! Maps the short names people type for Indian market indices to the Yahoo
//! symbols that carry their data. Lookups are case-insensitive.

use std::collections::HashMap;

use lazy_static::lazy_static;

/// (alias, Yahoo symbol)
const INDEX_ALIASES: &[(&str, &str)] = &[
    ("NIFTY", "^NSEI"),
    ("NIFTY50", "^NSEI"),
    ("NIFTY_50", "^NSEI"),
    ("BANKNIFTY", "^NSEBANK"),
    ("NIFTYBANK", "^NSEBANK"),
    ("FINNIFTY", "NIFTY_FIN_SERVICE.NS"),
    ("MIDCPNIFTY", "NIFTY_MID_SELECT.NS"),
    ("NIFTYIT", "^CNXIT"),
    ("NIFTYNEXT50", "^NSMIDCP"),
    ("SENSEX", "^BSESN"),
    ("INDIAVIX", "^INDIAVIX"),
];

lazy_static! {
    static ref INDEX_MAP: HashMap<&'static str, &'static str> =
        INDEX_ALIASES.iter().copied().collect();
}

/// Returns the Yahoo symbol for a known index alias.
pub fn index_symbol(alias: &str) -> Option<&'static str> {
    let key = alias.trim().to_ascii_uppercase();
    INDEX_MAP.get(key.as_str()).copied()
}

/// Returns true if `alias` names a known index.
pub fn is_known_index(alias: &str) -> bool {
    index_symbol(alias).is_some()
}
