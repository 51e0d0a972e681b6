//! HTTP error surface for the API.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::{error, warn};

use crate::pipeline::ValidationError;

/// Errors a route handler can surface to the client.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("database is not configured")]
    DatabaseNotConfigured,
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::Validation(err) => {
                warn!(error = %err, "request validation failed");
                (StatusCode::BAD_REQUEST, self.to_string())
            }
            ApiError::DatabaseNotConfigured => (StatusCode::SERVICE_UNAVAILABLE, self.to_string()),
            ApiError::Database(err) => {
                error!(error = %err, "database query failed");
                // Query details stay in the logs, not on the wire.
                (StatusCode::INTERNAL_SERVER_ERROR, "internal error".to_string())
            }
        };
        (status, message).into_response()
    }
}
