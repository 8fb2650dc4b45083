use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use stockpivot_core::errors::Error as CoreError;
use stockpivot_market_data::MarketDataError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Core(#[from] CoreError),
    #[error("{0}")]
    BadRequest(String),
    #[error("Unauthorized access")]
    Unauthorized,
    #[error("Request timed out")]
    RequestTimeout,
    #[error("{0}")]
    Internal(String),
}

#[derive(Serialize)]
struct ErrorBody {
    code: u16,
    error: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Core(e) => match e {
                CoreError::MissingSymbol => StatusCode::BAD_REQUEST,
                CoreError::InsufficientHistory { .. } | CoreError::Pivot(_) => {
                    StatusCode::UNPROCESSABLE_ENTITY
                }
                CoreError::MarketData(md) => match md {
                    MarketDataError::SymbolNotFound(_) | MarketDataError::NoDataForRange => {
                        StatusCode::NOT_FOUND
                    }
                    MarketDataError::InvalidSymbol(_) => StatusCode::BAD_REQUEST,
                    MarketDataError::Timeout { .. } => StatusCode::GATEWAY_TIMEOUT,
                    _ => StatusCode::BAD_GATEWAY,
                },
            },
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::RequestTimeout => StatusCode::REQUEST_TIMEOUT,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::warn!("Request failed with {}: {}", status, self);
        }
        let body = Json(ErrorBody {
            code: status.as_u16(),
            error: self.to_string(),
        });
        (status, body).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
