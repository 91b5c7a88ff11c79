use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::shared::errors::AppError;

/// Error-to-status translation at the HTTP boundary.
///
/// Domain and application errors bubble up unmodified; this is the single
/// place they become wire responses:
/// - shape validation  -> 422 with the field error map
/// - domain rejection  -> 400
/// - lookup miss       -> 404
/// - everything else   -> 500 with message passthrough
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::Validation(errors) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                json!({
                    "message": "The given data was invalid.",
                    "errors": errors,
                }),
            ),
            AppError::InvalidData(message) => (
                StatusCode::BAD_REQUEST,
                json!({
                    "error": "Invalid Pokemon data",
                    "message": message,
                }),
            ),
            AppError::NotFound(message) => (
                StatusCode::NOT_FOUND,
                json!({
                    "error": "Pokemon not found",
                    "message": message,
                }),
            ),
            AppError::DatabaseError(message) | AppError::InternalError(message) => {
                tracing::error!(error = %message, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({
                        "error": "Internal server error",
                        "message": message,
                    }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
