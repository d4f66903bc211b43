use crate::common::IDEMPOTENCY_KEY_HEADER;
use anyhow::anyhow;
use async_trait::async_trait;
use chrono::Utc;
use reqwest::{Method, Request, Response};
use reqwest_middleware::{Middleware, Next};
use reqwest_retry::Retryable;
use retry_policies::{RetryDecision, RetryPolicy};
use task_local_extensions::Extensions;

/// Middleware that retries transport failures (connection errors, timeouts) of idempotent requests.
///
/// Responses are never retried, whatever their status code: an error response from Flip
/// is a complete answer, not a transient failure.
///
/// A request is retried if and only if:
/// - Has an idempotent method (`GET`, `HEAD`, `OPTIONS`, `TRACE`, `PUT` or `DELETE`), or
/// - Has a `POST` or `PATCH` method *and* a non-empty `idempotency-key` header set, or
/// - Is sent with the [`RetryableRequest`] extension.
pub struct RetryTransportMiddleware<P> {
    retry_policy: P,
}

impl<P> RetryTransportMiddleware<P> {
    pub fn new(retry_policy: P) -> Self {
        Self { retry_policy }
    }
}

/// Extension marking a request as safe to send again, whatever its method.
#[derive(Debug, Clone, Copy)]
pub struct RetryableRequest;

fn is_idempotent(req: &Request) -> bool {
    match *req.method() {
        Method::GET
        | Method::HEAD
        | Method::OPTIONS
        | Method::TRACE
        | Method::PUT
        | Method::DELETE => true,
        Method::POST | Method::PATCH => req
            .headers()
            .get(IDEMPOTENCY_KEY_HEADER)
            .map_or(false, |v| !v.is_empty()),
        _ => false,
    }
}

#[async_trait]
impl<P> Middleware for RetryTransportMiddleware<P>
where
    P: RetryPolicy + Send + Sync + 'static,
{
    async fn handle(
        &self,
        req: Request,
        extensions: &mut Extensions,
        next: Next<'_>,
    ) -> reqwest_middleware::Result<Response> {
        if !is_idempotent(&req) && extensions.get::<RetryableRequest>().is_none() {
            return next.run(req, extensions).await;
        }

        let mut n_past_retries = 0;
        loop {
            let attempt = req.try_clone().ok_or_else(|| {
                reqwest_middleware::Error::Middleware(anyhow!(
                    "Request body cannot be cloned for retrying"
                ))
            })?;

            let result = next.clone().run(attempt, extensions).await;

            let is_transport_failure = result.is_err()
                && matches!(
                    Retryable::from_reqwest_response(&result),
                    Some(Retryable::Transient)
                );
            if !is_transport_failure {
                return result;
            }

            match self.retry_policy.should_retry(n_past_retries) {
                RetryDecision::Retry { execute_after } => {
                    let delay = (execute_after - Utc::now()).to_std().unwrap_or_default();
                    tracing::debug!(
                        "Transport failure, retry attempt #{} in {:?}",
                        n_past_retries + 1,
                        delay
                    );
                    tokio::time::sleep(delay).await;
                    n_past_retries += 1;
                }
                RetryDecision::DoNotRetry => return result,
            }
        }
    }
}
