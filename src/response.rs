//! Decoding of Flip responses into either a success payload or an [`ApiError`].

use crate::error::{ApiError, GeneralErrorResponse, ValidationErrorResponse};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;

/// Decodes a raw response body.
///
/// - `200`: the body is parsed as `T`. Some endpoints answer errors with a `200` status,
///   so a body that is not a `T` is tried as a [`GeneralErrorResponse`] before giving up.
/// - `422`: the body must be a [`ValidationErrorResponse`].
/// - anything else: the body must be a [`GeneralErrorResponse`].
///
/// A body not matching the expected shape gives an [`ApiError::Decode`] carrying the status.
pub(crate) fn decode<T: DeserializeOwned>(status: StatusCode, body: &[u8]) -> Result<T, ApiError> {
    let status_code = status.as_u16();
    match status {
        StatusCode::OK => serde_json::from_slice(body).map_err(|e| {
            match serde_json::from_slice::<GeneralErrorResponse>(body) {
                Ok(error) => ApiError::General {
                    status: status_code,
                    error,
                },
                Err(_) => ApiError::Decode {
                    status: status_code,
                    message: e.to_string(),
                },
            }
        }),
        StatusCode::UNPROCESSABLE_ENTITY => {
            Err(match serde_json::from_slice::<ValidationErrorResponse>(body) {
                Ok(error) => ApiError::Validation {
                    status: status_code,
                    error,
                },
                Err(e) => ApiError::Decode {
                    status: status_code,
                    message: e.to_string(),
                },
            })
        }
        _ => Err(match serde_json::from_slice::<GeneralErrorResponse>(body) {
            Ok(error) => ApiError::General {
                status: status_code,
                error,
            },
            Err(e) => ApiError::Decode {
                status: status_code,
                message: e.to_string(),
            },
        }),
    }
}
