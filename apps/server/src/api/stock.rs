use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Extension, Json,
};
use serde::Deserialize;
use stockpivot_core::StockSnapshot;
use stockpivot_market_data::SymbolKind;

use crate::{
    auth::ApiClient,
    error::{ApiError, ApiResult},
    main_lib::AppState,
};

#[derive(Deserialize)]
pub struct StockQuery {
    name: Option<String>,
    kind: Option<String>,
}

fn parse_kind(raw: Option<&str>) -> ApiResult<Option<SymbolKind>> {
    raw.map(str::trim)
        .filter(|k| !k.is_empty())
        .map(str::parse::<SymbolKind>)
        .transpose()
        .map_err(ApiError::BadRequest)
}

/// Live price, profile and pivot levels for one stock or index.
pub async fn get_stock(
    State(state): State<Arc<AppState>>,
    Extension(client): Extension<ApiClient>,
    Query(query): Query<StockQuery>,
) -> ApiResult<Json<StockSnapshot>> {
    let kind = parse_kind(query.kind.as_deref())?;
    let name = query.name.unwrap_or_default();

    let snapshot = state.snapshot_service.get_snapshot(&name, kind).await?;
    tracing::info!(
        role = %client.role,
        symbol = %snapshot.symbol,
        kind = %snapshot.kind,
        "Served stock snapshot"
    );
    Ok(Json(snapshot))
}
