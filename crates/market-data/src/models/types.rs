use std::sync::Arc;

/// Provider-specific symbol discovered at runtime
pub type ProviderSymbol = Arc<str>;
