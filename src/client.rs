//! Module containing the main Flip API client.

use crate::{
    apis::{disbursements::DisbursementsApi, general::GeneralApi, FlipClientInner},
    common::{DEFAULT_PRODUCTION_URL, DEFAULT_SANDBOX_URL},
    error::RequestError,
    transport::{build_client_with_middleware, HttpOptions},
};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use reqwest::{header::HeaderValue, Url};
use secrecy::{ExposeSecret, Secret};
use std::sync::Arc;

/// Client for Flip Business APIs.
///
/// Cloning a `FlipClient` is cheap: all clones share the same HTTP client and configuration.
#[derive(Debug, Clone)]
pub struct FlipClient {
    /// General APIs client (banks, balance, service status).
    pub general: GeneralApi,
    /// Disbursement APIs client.
    pub disbursements: DisbursementsApi,
}

impl FlipClient {
    /// Builds a new [`FlipClient`](crate::client::FlipClient) with the default configuration.
    pub fn new(credentials: Credentials) -> FlipClient {
        FlipClientBuilder::new(credentials).build()
    }

    /// Returns a new builder to configure a new [`FlipClient`](crate::client::FlipClient).
    pub fn builder(credentials: Credentials) -> FlipClientBuilder {
        FlipClientBuilder::new(credentials)
    }
}

/// Builder for a [`FlipClient`](crate::client::FlipClient).
#[derive(Debug)]
pub struct FlipClientBuilder {
    client: reqwest::Client,
    http_options: HttpOptions,
    environment: Environment,
    credentials: Credentials,
    log_level: LogLevel,
}

impl FlipClientBuilder {
    /// Creates a new builder to configure a [`FlipClient`](crate::client::FlipClient).
    pub fn new(credentials: Credentials) -> Self {
        Self {
            client: reqwest::Client::new(),
            http_options: HttpOptions::default(),
            environment: Environment::Production,
            credentials,
            log_level: LogLevel::default(),
        }
    }

    /// Consumes the builder and builds a new [`FlipClient`](crate::client::FlipClient).
    pub fn build(self) -> FlipClient {
        let inner = Arc::new(FlipClientInner {
            client: build_client_with_middleware(self.client, &self.http_options),
            environment: self.environment,
            credentials: self.credentials,
            http_options: self.http_options,
            log_level: self.log_level,
        });

        FlipClient {
            general: GeneralApi::new(inner.clone()),
            disbursements: DisbursementsApi::new(inner),
        }
    }

    /// Sets a specific reqwest [`Client`](reqwest::Client) to use.
    pub fn with_http_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    /// Sets timeout and retry behaviour of outgoing requests.
    ///
    /// Defaults to a 10 seconds timeout per attempt and no retries.
    pub fn with_http_options(mut self, http_options: HttpOptions) -> Self {
        self.http_options = http_options;
        self
    }

    /// Sets the environment to which this client should connect.
    ///
    /// Defaults to [`Environment::Production`].
    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    /// Sets how chatty the client is.
    ///
    /// Defaults to [`LogLevel::Info`].
    pub fn with_log_level(mut self, log_level: LogLevel) -> Self {
        self.log_level = log_level;
        self
    }
}

/// Flip environment to which a [`FlipClient`](crate::client::FlipClient) connects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    /// `https://bigflip.id/api/v2`
    Production,
    /// `https://bigflip.id/big_sandbox_api/v2`
    Sandbox,
    /// Any other base URL, e.g. a proxy or a local mock server.
    Custom(Url),
}

impl Environment {
    /// Base URL of every API call.
    pub fn base_url(&self) -> Result<Url, url::ParseError> {
        match self {
            Environment::Production => Url::parse(DEFAULT_PRODUCTION_URL),
            Environment::Sandbox => Url::parse(DEFAULT_SANDBOX_URL),
            Environment::Custom(url) => Ok(url.clone()),
        }
    }

    /// Full URL of an endpoint.
    ///
    /// The path of the base URL is preserved: `/general/banks` on
    /// `https://bigflip.id/api/v2` gives `https://bigflip.id/api/v2/general/banks`.
    pub fn endpoint_url(&self, path: &str) -> Result<Url, url::ParseError> {
        let base = self.base_url()?;
        Url::parse(&format!(
            "{}/{}",
            base.as_str().trim_end_matches('/'),
            path.trim_start_matches('/')
        ))
    }
}

/// Credentials used to authenticate against Flip.
#[derive(Debug, Clone)]
pub enum Credentials {
    /// Flip secret key, sent as the username of HTTP Basic auth with an empty password.
    SecretKey(Secret<String>),
    /// A full `Authorization` header value, sent as is (e.g. `Basic ZmxpcDo=`).
    AuthorizationHeader(Secret<String>),
}

impl Credentials {
    pub fn secret_key(secret_key: impl Into<String>) -> Self {
        Credentials::SecretKey(Secret::new(secret_key.into()))
    }

    pub fn authorization_header(header_value: impl Into<String>) -> Self {
        Credentials::AuthorizationHeader(Secret::new(header_value.into()))
    }

    /// Value of the `Authorization` header attached to each request.
    pub(crate) fn header_value(&self) -> Result<HeaderValue, RequestError> {
        let raw = match self {
            Credentials::SecretKey(key) => {
                format!("Basic {}", STANDARD.encode(format!("{}:", key.expose_secret())))
            }
            Credentials::AuthorizationHeader(value) => value.expose_secret().clone(),
        };

        let mut header_value = HeaderValue::from_str(&raw)
            .map_err(|_| RequestError::HeaderValue("Authorization".to_string()))?;
        header_value.set_sensitive(true);

        Ok(header_value)
    }
}

/// Logging verbosity of the client.
///
/// Each level includes the messages of the levels below it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum LogLevel {
    /// No logging at all.
    Off,
    /// Request construction, transport and decoding failures.
    Errors,
    /// Outgoing requests.
    #[default]
    Info,
    /// Timings, raw status codes and raw response bodies.
    Debug,
}
