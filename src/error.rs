//! Generic error channel for HTTP handlers
//!
//! Handlers never interpret store failures. Anything a store operation
//! reports lands here and is rendered as an internal error carrying the raw
//! store message, schema validation failures included.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::store::StoreError;

/// A store failure forwarded by a handler
#[derive(Debug)]
pub struct AppError(StoreError);

/// Error response body
#[derive(Serialize)]
struct ErrorBody {
    message: String,
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        Self(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self.0, "store operation failed");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorBody {
                message: self.0.to_string(),
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn store_failures_become_internal_errors_with_the_raw_message() {
        let err = AppError::from(StoreError::Backend("Error finding".to_string()));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(value, serde_json::json!({ "message": "Error finding" }));
    }
}
