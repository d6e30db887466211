//! Maps engine errors onto HTTP responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use custody_ledger::CustodyError;
use serde::{Deserialize, Serialize};

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub kind: String,
}

pub struct ApiError(pub StatusCode, pub Json<ErrorResponse>);

impl ApiError {
    pub fn new(status: StatusCode, kind: &str, msg: impl Into<String>) -> Self {
        ApiError(
            status,
            Json(ErrorResponse {
                error: msg.into(),
                kind: kind.to_string(),
            }),
        )
    }

    pub fn unprocessable(msg: impl Into<String>) -> Self {
        Self::new(StatusCode::UNPROCESSABLE_ENTITY, "invalid_input", msg)
    }
}

impl From<CustodyError> for ApiError {
    fn from(e: CustodyError) -> Self {
        let status = match &e {
            CustodyError::AlreadyRegistered(_) => StatusCode::CONFLICT,
            CustodyError::NotFound(_) => StatusCode::NOT_FOUND,
            CustodyError::InvalidCredential(_) => StatusCode::UNAUTHORIZED,
            CustodyError::HashMismatch { .. } | CustodyError::InvalidInput(_) => {
                StatusCode::BAD_REQUEST
            }
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status.is_server_error() {
            tracing::error!("Request failed: {}", e);
        }
        ApiError::new(status, e.kind(), e.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}
