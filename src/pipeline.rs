//! Request execution: build, send, decode.

use crate::{
    apis::FlipClientInner,
    client::LogLevel,
    error::{ApiError, Error},
    middlewares::retry_transport::RetryableRequest,
    request::ApiRequest,
    response::decode,
};
use reqwest::Request;
use serde::de::DeserializeOwned;
use std::time::Instant;
use task_local_extensions::Extensions;

impl FlipClientInner {
    /// Builds, sends and decodes a single API call.
    pub(crate) async fn call<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T, Error> {
        let mut extensions = Extensions::new();
        if request.is_retryable() {
            extensions.insert(RetryableRequest);
        }

        let request = request.build(self).map_err(|e| {
            if self.log_level >= LogLevel::Errors {
                tracing::error!("Request creation failed: {}", e);
            }
            Error::InvalidRequest(e)
        })?;

        self.execute(request, extensions).await
    }

    /// Sends a request through the configured transport and decodes the response.
    ///
    /// Transport failures are returned once the transport gave up retrying; no decoding is attempted.
    pub(crate) async fn execute<T: DeserializeOwned>(
        &self,
        request: Request,
        mut extensions: Extensions,
    ) -> Result<T, Error> {
        let start = Instant::now();
        let response = self
            .client
            .execute_with_extensions(request, &mut extensions)
            .await
            .map_err(|e| {
                let e = Error::from(e);
                if self.log_level >= LogLevel::Errors {
                    tracing::error!("Request failed: {}", e);
                }
                e
            })?;

        if self.log_level >= LogLevel::Debug {
            tracing::debug!("Completed in {:?}", start.elapsed());
        }

        let status = response.status();
        let body = response.bytes().await.map_err(|e| {
            if self.log_level >= LogLevel::Errors {
                tracing::error!("Cannot read response body: {}", e);
            }
            Error::HttpError(e)
        })?;

        if self.log_level >= LogLevel::Debug {
            tracing::debug!("Flip HTTP status response: {}", status.as_u16());
            tracing::debug!("Flip body response: {}", String::from_utf8_lossy(&body));
        }

        decode(status, &body).map_err(|e| {
            if let ApiError::Decode { .. } = e {
                if self.log_level >= LogLevel::Errors {
                    tracing::error!("{}", e);
                }
            }
            Error::ApiError(e)
        })
    }
}
