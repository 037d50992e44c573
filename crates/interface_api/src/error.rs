//! API error handling

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use domain_fund::{FundError, StoreError};
use serde::Serialize;
use thiserror::Error;

/// Message returned when a fund list query fails
pub const LIST_FAILED: &str = "Failed to fetch funds data";

/// Message returned when a fund detail query fails
pub const DETAIL_FAILED: &str = "Failed to fetch fund details";

/// Message returned for an unknown scheme code
pub const FUND_NOT_FOUND: &str = "Fund not found";

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    BadRequest(String),

    /// A query failed; `details` carries the underlying message
    #[error("{error}: {details}")]
    Failed { error: String, details: String },
}

impl ApiError {
    /// Wraps a store error with a user-facing message
    pub fn failed(error: &str, source: &StoreError) -> Self {
        ApiError::Failed {
            error: error.to_string(),
            details: source.detail().to_string(),
        }
    }

    /// HTTP status for this error
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Failed { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let (error, details) = match self {
            ApiError::NotFound(msg) | ApiError::BadRequest(msg) => (msg, None),
            ApiError::Failed { error, details } => (error, Some(details)),
        };

        let body = ErrorResponse {
            success: false,
            error,
            details,
        };

        (status, Json(body)).into_response()
    }
}

impl From<FundError> for ApiError {
    fn from(err: FundError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}
