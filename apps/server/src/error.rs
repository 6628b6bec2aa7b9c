//! API error mapping.
//!
//! Converts core errors into the HTTP responses the legacy callers expect.
//! Two contracts are deliberately non-standard and preserved for
//! compatibility:
//! - uniqueness conflicts answer HTTP 200 with `{status:"error", code:409}`
//!   in the body;
//! - a failed ETL registration answers HTTP 401 with `{status:"failed"}`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use cmhub_core::errors::{DatabaseError, Error};

pub type ApiResult<T> = std::result::Result<T, ApiError>;

pub struct ApiError(pub Error);

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self.0 {
            Error::AlreadyExists(message) => (
                StatusCode::OK,
                json!({ "message": message, "status": "error", "code": 409 }),
            ),
            Error::Upstream(message) => {
                tracing::warn!("ETL trigger failed: {message}");
                (StatusCode::UNAUTHORIZED, json!({ "status": "failed" }))
            }
            Error::Database(DatabaseError::NotFound(message)) => {
                (StatusCode::NOT_FOUND, json!({ "error": message }))
            }
            Error::Validation(e) => (StatusCode::BAD_REQUEST, json!({ "error": e.to_string() })),
            other => {
                tracing::error!("Unhandled API error: {other}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "internal server error" }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
