//! Timeout and retry configuration of the underlying HTTP transport.

use crate::middlewares::{
    inject_user_agent::InjectUserAgentMiddleware, retry_transport::RetryTransportMiddleware,
};
use chrono::Utc;
use rand::Rng;
use reqwest_middleware::ClientWithMiddleware;
use reqwest_tracing::TracingMiddleware;
use retry_policies::{RetryDecision, RetryPolicy};
use std::time::Duration;

/// Options of the HTTP transport used by a [`FlipClient`](crate::FlipClient).
///
/// The worst case duration of a single API call is roughly
/// `timeout * (1 + retry_count) + retry_count * (backoff_interval + max_jitter_interval)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HttpOptions {
    /// Upper bound of a single attempt, from sending the request to receiving the whole response.
    pub timeout: Duration,
    /// Maximum number of additional attempts after a transport failure.
    pub retry_count: u32,
    /// Base delay between two attempts.
    pub backoff_interval: Duration,
    /// Upper bound of the random jitter added to each delay.
    pub max_jitter_interval: Duration,
}

impl Default for HttpOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(10),
            retry_count: 0,
            backoff_interval: Duration::from_millis(2),
            max_jitter_interval: Duration::from_millis(5),
        }
    }
}

impl HttpOptions {
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_retry_count(mut self, retry_count: u32) -> Self {
        self.retry_count = retry_count;
        self
    }

    pub fn with_backoff_interval(mut self, backoff_interval: Duration) -> Self {
        self.backoff_interval = backoff_interval;
        self
    }

    pub fn with_max_jitter_interval(mut self, max_jitter_interval: Duration) -> Self {
        self.max_jitter_interval = max_jitter_interval;
        self
    }

    /// Retry policy matching these options.
    pub fn retry_policy(&self) -> ConstantBackoff {
        ConstantBackoff {
            max_n_retries: self.retry_count,
            interval: self.backoff_interval,
            max_jitter: self.max_jitter_interval,
        }
    }
}

/// Retry policy waiting a constant interval plus a random jitter between attempts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConstantBackoff {
    pub max_n_retries: u32,
    pub interval: Duration,
    pub max_jitter: Duration,
}

impl ConstantBackoff {
    fn jitter(&self) -> Duration {
        if self.max_jitter.is_zero() {
            return Duration::ZERO;
        }

        rand::thread_rng().gen_range(Duration::ZERO..=self.max_jitter)
    }
}

impl RetryPolicy for ConstantBackoff {
    fn should_retry(&self, n_past_retries: u32) -> RetryDecision {
        if n_past_retries >= self.max_n_retries {
            return RetryDecision::DoNotRetry;
        }

        let delay = self.interval + self.jitter();
        match chrono::Duration::from_std(delay) {
            Ok(delay) => RetryDecision::Retry {
                execute_after: Utc::now() + delay,
            },
            Err(_) => RetryDecision::DoNotRetry,
        }
    }
}

/// Wraps a reqwest client with the middlewares used for every Flip API call.
pub(crate) fn build_client_with_middleware(
    client: reqwest::Client,
    http_options: &HttpOptions,
) -> ClientWithMiddleware {
    let mut builder = reqwest_middleware::ClientBuilder::new(client)
        .with(TracingMiddleware::default())
        .with(InjectUserAgentMiddleware::new());

    if http_options.retry_count > 0 {
        builder = builder.with(RetryTransportMiddleware::new(http_options.retry_policy()));
    }

    builder.build()
}
