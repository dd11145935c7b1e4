//! Error types for the share service.
//!
//! Token failures deliberately collapse into one short plaintext 400:
//! telling an unauthenticated caller whether a token was malformed,
//! forged, or unparseable would aid forgery, so the distinction only
//! reaches the log.

use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use checksource_core::TokenError;

/// Share service error type.
#[derive(Debug, thiserror::Error)]
pub enum ShareError {
    /// No `token` query parameter was supplied.
    #[error("token required")]
    MissingToken,

    /// The token failed validation; the inner error says why, the
    /// response does not.
    #[error("invalid token: {0}")]
    InvalidToken(#[from] TokenError),

    /// Issuance was requested but no signing secret is configured.
    #[error("sharing unavailable")]
    SharingDisabled,

    /// Internal server error (rendering, encoding).
    #[error("internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for ShareError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::MissingToken => (StatusCode::BAD_REQUEST, "token required"),
            Self::InvalidToken(err) => {
                tracing::debug!(error = %err, "rejected share token");
                (StatusCode::BAD_REQUEST, "invalid token")
            }
            Self::SharingDisabled => (StatusCode::SERVICE_UNAVAILABLE, "sharing unavailable"),
            Self::Internal(err) => {
                tracing::error!(error = %err, "internal server error");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal error")
            }
        };

        (
            status,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            message,
        )
            .into_response()
    }
}
