//! HTTP error mapping for the message API.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::error;

use crate::service::ServiceError;

/// Body returned for server faults. Internal detail stays in the logs.
pub const GENERIC_FAILURE: &str =
    "Unknown exception occurred - please check API or contact support team";

/// Error wrapper for converting API errors to HTTP responses.
///
/// Error responses have the format:
/// ```json
/// { "status": "error", "message": "..." }
/// ```
#[derive(Debug)]
pub enum ApiError {
    /// No supported vendor media type in `Accept`.
    NotAcceptable,
    /// The addressed resource or route does not exist.
    NotFound,
    /// The response body could not be rendered in the negotiated format.
    Render(String),
    Service(ServiceError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::NotAcceptable => (
                StatusCode::NOT_ACCEPTABLE,
                "supported media types: application/vnd.messages-v{1,2}+json, application/vnd.messages-v{1,2}+xml"
                    .to_string(),
            ),
            ApiError::NotFound => return StatusCode::NOT_FOUND.into_response(),
            ApiError::Render(detail) => {
                error!(error = %detail, "couldn't render response");
                (StatusCode::INTERNAL_SERVER_ERROR, GENERIC_FAILURE.to_string())
            }
            ApiError::Service(ServiceError::Unsupported { .. }) => {
                return StatusCode::NOT_FOUND.into_response()
            }
            ApiError::Service(ServiceError::InvalidArgument(msg)) => {
                (StatusCode::BAD_REQUEST, msg.clone())
            }
            ApiError::Service(err @ ServiceError::Storage(_)) => {
                error!(error = %err, "error occurred while handling request");
                (StatusCode::INTERNAL_SERVER_ERROR, GENERIC_FAILURE.to_string())
            }
        };

        let body = serde_json::json!({
            "status": "error",
            "message": message
        });

        (status, Json(body)).into_response()
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        ApiError::Service(err)
    }
}
