use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use gitgate_backend::BackendError;
use gitgate_walk::WalkError;

/// Errors surfaced to HTTP clients.
///
/// Only reference enumeration is a server-side fault. Everything else is
/// driven by the user-controlled URL and maps to 404, with the error text
/// written verbatim as the body.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The backend could not enumerate references.
    #[error(transparent)]
    RefEnumeration(BackendError),

    /// The request is not `GET /blob/<target>`.
    #[error("malformed request path")]
    MalformedRequest,

    /// The walk failed: unknown object, missing entry, or kind conflict.
    #[error(transparent)]
    Walk(#[from] WalkError),

    /// Listener or connection I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for gateway operations.
pub type GatewayResult<T> = Result<T, GatewayError>;

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        match self {
            GatewayError::RefEnumeration(err) => {
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()).into_response()
            }
            GatewayError::MalformedRequest => StatusCode::NOT_FOUND.into_response(),
            GatewayError::Walk(err) => (StatusCode::NOT_FOUND, err.to_string()).into_response(),
            GatewayError::Io(err) => {
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()).into_response()
            }
        }
    }
}
