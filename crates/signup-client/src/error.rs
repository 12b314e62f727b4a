//! Error types for the signup client.

use signup_forms::FormError;
use thiserror::Error;

/// Client-specific errors.
///
/// A rejected or unreachable registration is not an error here; it is a
/// [`SignupOutcome`](crate::SignupOutcome) reflected in the form state.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The form refused to submit (invalid, or already in flight).
    #[error(transparent)]
    Form(#[from] FormError),

    /// The HTTP client could not be built.
    #[error("http client error: {0}")]
    Http(#[from] reqwest::Error),

    /// The configured base URL is not an http(s) URL.
    #[error("invalid base url: {0}")]
    InvalidBaseUrl(String),
}

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;
