//! Standard errors used by all functions in the crate.

use reqwest::header::InvalidHeaderName;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Error collecting all possible failures of the Flip client.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The outbound request could not be built. Nothing was sent.
    #[error("Invalid request: {0}")]
    InvalidRequest(#[from] RequestError),
    /// Reqwest error.
    ///
    /// Connection failures and timeouts end up here once all the configured retries are exhausted.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),
    /// Error returned by a Flip API endpoint, or a response that could not be decoded.
    #[error("{0}")]
    ApiError(#[from] ApiError),
    /// Catch-all variant for unexpected errors.
    #[error(transparent)]
    Other(anyhow::Error),
}

impl From<reqwest_middleware::Error> for Error {
    fn from(e: reqwest_middleware::Error) -> Self {
        match e {
            reqwest_middleware::Error::Reqwest(e) => Error::HttpError(e),
            reqwest_middleware::Error::Middleware(e) => {
                e.downcast::<Error>().unwrap_or_else(Error::Other)
            }
        }
    }
}

impl From<Error> for reqwest_middleware::Error {
    fn from(e: Error) -> Self {
        reqwest_middleware::Error::Middleware(e.into())
    }
}

/// Failures while building an outbound request.
#[derive(thiserror::Error, Debug)]
pub enum RequestError {
    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),
    #[error("{0}")]
    HeaderName(#[from] InvalidHeaderName),
    #[error("invalid value for header `{0}`")]
    HeaderValue(String),
    #[error("an idempotency key is required")]
    MissingIdempotencyKey,
    #[error("cannot encode parameters: {0}")]
    Encoding(#[from] serde_urlencoded::ser::Error),
}

/// Error envelope of a failed Flip API call.
///
/// The shape depends on the HTTP status returned by Flip:
/// `422 Unprocessable Entity` responses carry field-level validation errors,
/// every other failure carries a [`GeneralErrorResponse`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Request parameters were rejected (HTTP 422).
    Validation {
        status: u16,
        error: ValidationErrorResponse,
    },
    /// Authentication failures, missing resources, server errors and the like.
    General {
        status: u16,
        error: GeneralErrorResponse,
    },
    /// The response body did not match any of the expected shapes.
    Decode { status: u16, message: String },
}

impl ApiError {
    /// HTTP status returned by Flip.
    pub fn status(&self) -> u16 {
        match self {
            ApiError::Validation { status, .. }
            | ApiError::General { status, .. }
            | ApiError::Decode { status, .. } => *status,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Validation { status, error } => {
                write!(f, "Flip HTTP error {}: {}", status, error.code)?;

                if !error.errors.is_empty() {
                    write!(f, "\nAll errors:")?;
                    for e in &error.errors {
                        write!(f, "\n- {} ({}): {}", e.attribute, e.code, e.message)?;
                    }
                }

                Ok(())
            }
            ApiError::General { status, error } => write!(
                f,
                "Flip HTTP error {}: {} ({}, code {}): {}",
                status, error.name, error.r#type, error.code, error.message
            ),
            ApiError::Decode { status, message } => {
                write!(f, "Cannot decode Flip response (HTTP {}): {}", status, message)
            }
        }
    }
}

/// Body of a `422 Unprocessable Entity` response.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrorResponse {
    pub code: String,
    pub errors: Vec<ValidationError>,
}

/// A single rejected attribute.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub attribute: String,
    pub code: u16,
    pub message: String,
}

/// Body of any other error response.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct GeneralErrorResponse {
    pub name: String,
    pub message: String,
    pub code: i64,
    pub status: u16,
    pub r#type: String,
}
