/**
 * Error Conversion
 *
 * The single place where an `ApiError` becomes an HTTP response.
 *
 * # Response Format
 *
 * Expected failures (401, 404) carry only the canonical reason phrase as
 * plain text, e.g. `Unauthorized`. 400 and 409 carry their message as
 * plain text. Server errors are logged and returned as JSON:
 * ```json
 * {
 *   "error": "Internal Server Error",
 *   "name": "InternalError",
 *   "message": "store operation failed"
 * }
 * ```
 */

use axum::{
    response::{IntoResponse, Response},
    Json,
};

use crate::backend::error::types::ApiError;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
            let body = serde_json::json!({
                "error": status.canonical_reason().unwrap_or("Internal Server Error"),
                "name": self.name(),
                "message": self.public_message(),
            });
            return (status, Json(body)).into_response();
        }

        match &self {
            ApiError::Validation { message } | ApiError::Conflict { message } => {
                tracing::warn!(kind = self.name(), "{}", message);
                (status, message.clone()).into_response()
            }
            _ => {
                tracing::warn!(kind = self.name(), "Rejected request: {}", self);
                (status, status.canonical_reason().unwrap_or_default()).into_response()
            }
        }
    }
}
