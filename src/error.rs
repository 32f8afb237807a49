//! Unified error types for SessionMint.
//! Used by: config, session, handlers, extract.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("token expired")]
    TokenExpired,

    #[error("invalid signature")]
    InvalidSignature,

    #[error("invalid token format: {0}")]
    InvalidToken(String),

    #[error("no session cookie")]
    MissingSession,

    #[error("invalid request: {0}")]
    Validation(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("signing error: {0}")]
    Signing(String),
}

impl Error {
    /// True for every variant that means "treat the caller as logged out".
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            Error::TokenExpired
                | Error::InvalidSignature
                | Error::InvalidToken(_)
                | Error::MissingSession
        )
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = match &self {
            Error::TokenExpired
            | Error::InvalidSignature
            | Error::InvalidToken(_)
            | Error::MissingSession => StatusCode::UNAUTHORIZED,
            Error::Validation(_) => StatusCode::BAD_REQUEST,
            Error::Config(_) | Error::Signing(_) => {
                tracing::error!(error = %self, "internal session error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        (status, self.to_string()).into_response()
    }
}

pub type Result<T> = std::result::Result<T, Error>;
