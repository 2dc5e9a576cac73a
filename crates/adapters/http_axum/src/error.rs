//! HTTP error response mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use rolodex_domain::error::{RolodexError, ValidationError};

/// Maps [`RolodexError`] to a plain-text HTTP response with the matching status code.
pub struct ApiError(RolodexError);

impl From<RolodexError> for ApiError {
    fn from(err: RolodexError) -> Self {
        Self(err)
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            RolodexError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            RolodexError::NotFound(err) => (StatusCode::NOT_FOUND, err.to_string()),
            RolodexError::Storage(err) => {
                tracing::error!(error = %err, source = ?err.source(), "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to execute the query".to_string(),
                )
            }
        };

        (status, message).into_response()
    }
}
