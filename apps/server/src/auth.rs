use std::{collections::HashMap, fmt, str::FromStr, sync::Arc};

use axum::{
    body::Body,
    extract::{Query, State},
    http::Request,
    middleware::Next,
    response::Response,
};
use serde::Deserialize;

use crate::{error::ApiError, main_lib::AppState};

pub const API_KEY_HEADER: &str = "x-api-key";

/// Accepted API keys and the role each one carries.
///
/// Parsed from `key:role` pairs separated by commas.
#[derive(Clone, Default)]
pub struct ApiKeyStore {
    keys: HashMap<String, String>,
}

impl ApiKeyStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_key(mut self, key: impl Into<String>, role: impl Into<String>) -> Self {
        self.keys.insert(key.into(), role.into());
        self
    }

    pub fn role_for(&self, key: &str) -> Option<&str> {
        self.keys.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

// Keys are secrets; only the count is printed.
impl fmt::Debug for ApiKeyStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiKeyStore")
            .field("keys", &self.keys.len())
            .finish()
    }
}

impl FromStr for ApiKeyStore {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut store = Self::new();
        for entry in s.split(',').map(str::trim).filter(|e| !e.is_empty()) {
            let (key, role) = entry
                .split_once(':')
                .map(|(k, r)| (k.trim(), r.trim()))
                .filter(|(k, r)| !k.is_empty() && !r.is_empty())
                .ok_or_else(|| "entries must look like key:role".to_string())?;
            store = store.with_key(key, role);
        }
        if store.is_empty() {
            return Err("no API keys configured".to_string());
        }
        Ok(store)
    }
}

/// Identity attached to a request once its API key has been accepted.
#[derive(Clone, Debug)]
pub struct ApiClient {
    pub role: String,
}

#[derive(Deserialize)]
struct ApiKeyParams {
    api_key: Option<String>,
}

/// Key from the query string, falling back to the header. Blank values
/// count as absent.
fn presented_key(request: &Request<Body>) -> Option<String> {
    Query::<ApiKeyParams>::try_from_uri(request.uri())
        .ok()
        .and_then(|Query(params)| params.api_key)
        .and_then(|key| non_blank(key.as_str()))
        .or_else(|| {
            request
                .headers()
                .get(API_KEY_HEADER)
                .and_then(|value| value.to_str().ok())
                .and_then(non_blank)
        })
}

fn non_blank(key: &str) -> Option<String> {
    Some(key.trim())
        .filter(|k| !k.is_empty())
        .map(str::to_string)
}

/// Rejects requests whose `api_key` query parameter (or `X-API-Key` header)
/// is missing or unknown.
pub async fn require_api_key(
    State(state): State<Arc<AppState>>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, ApiError> {
    let Some(key) = presented_key(&request) else {
        return Err(ApiError::Unauthorized);
    };
    let Some(role) = state.api_keys.role_for(&key) else {
        tracing::debug!("Rejected unknown API key");
        return Err(ApiError::Unauthorized);
    };

    request.extensions_mut().insert(ApiClient {
        role: role.to_string(),
    });
    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_key_role_pairs() {
        let store: ApiKeyStore = "alpha:admin, beta : reader ,".parse().unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(store.role_for("alpha"), Some("admin"));
        assert_eq!(store.role_for("beta"), Some("reader"));
        assert_eq!(store.role_for("gamma"), None);
    }

    #[test]
    fn rejects_malformed_entries() {
        assert!("alpha".parse::<ApiKeyStore>().is_err());
        assert!("alpha:".parse::<ApiKeyStore>().is_err());
        assert!(":admin".parse::<ApiKeyStore>().is_err());
        assert!(" , ".parse::<ApiKeyStore>().is_err());
    }

    fn request(uri: &str, header: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().uri(uri);
        if let Some(value) = header {
            builder = builder.header(API_KEY_HEADER, value);
        }
        builder.body(Body::empty()).unwrap()
    }

    #[test]
    fn query_key_wins_over_header() {
        let req = request("/stock?api_key=alpha", Some("beta"));
        assert_eq!(presented_key(&req).as_deref(), Some("alpha"));
    }

    #[test]
    fn blank_query_key_falls_back_to_header() {
        let req = request("/stock?api_key=&name=x", Some("beta"));
        assert_eq!(presented_key(&req).as_deref(), Some("beta"));

        let req = request("/stock?api_key=%20%20", Some(" beta "));
        assert_eq!(presented_key(&req).as_deref(), Some("beta"));
    }

    #[test]
    fn blank_keys_count_as_missing() {
        assert_eq!(presented_key(&request("/stock?api_key=", None)), None);
        assert_eq!(presented_key(&request("/stock", Some("  "))), None);
    }

    #[test]
    fn debug_hides_keys() {
        let store = ApiKeyStore::new().with_key("top-secret", "admin");
        let printed = format!("{:?}", store);
        assert!(!printed.contains("top-secret"));
    }
}
