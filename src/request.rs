//! Construction of outbound requests.

use crate::{apis::FlipClientInner, client::LogLevel, error::RequestError};
use reqwest::{
    header::{HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE},
    Method, Request,
};
use serde::Serialize;

static FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Declarative description of a single Flip API call, turned into a [`Request`] by [`ApiRequest::build`].
#[derive(Debug, Clone)]
pub(crate) struct ApiRequest {
    method: Method,
    path: String,
    query: Option<String>,
    headers: Vec<(String, String)>,
    body: Option<String>,
    retryable: bool,
}

impl ApiRequest {
    pub(crate) fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: None,
            headers: Vec::new(),
            body: None,
            retryable: false,
        }
    }

    pub(crate) fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub(crate) fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    /// Appends a header. Later values win over earlier ones with the same name.
    pub(crate) fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Allows the transport to send the request again after a transient failure,
    /// even if its method is not idempotent.
    pub(crate) fn retryable(mut self) -> Self {
        self.retryable = true;
        self
    }

    pub(crate) fn is_retryable(&self) -> bool {
        self.retryable
    }

    /// URL-encodes `query` as the query string.
    pub(crate) fn query<Q: Serialize + ?Sized>(mut self, query: &Q) -> Result<Self, RequestError> {
        let encoded = serde_urlencoded::to_string(query)?;
        self.query = (!encoded.is_empty()).then(|| encoded);
        Ok(self)
    }

    /// URL-encodes `form` as an `application/x-www-form-urlencoded` body.
    pub(crate) fn form<F: Serialize + ?Sized>(mut self, form: &F) -> Result<Self, RequestError> {
        self.body = Some(serde_urlencoded::to_string(form)?);
        Ok(self.header(CONTENT_TYPE.as_str(), FORM_CONTENT_TYPE))
    }

    /// Builds the request: full URL, caller headers, authentication and body.
    ///
    /// The `Authorization` header is always derived from the client credentials
    /// and cannot be overridden by caller headers.
    pub(crate) fn build(self, inner: &FlipClientInner) -> Result<Request, RequestError> {
        let mut url = inner.environment.endpoint_url(&self.path)?;
        url.set_query(self.query.as_deref());

        let mut request = Request::new(self.method, url);
        *request.timeout_mut() = Some(inner.http_options.timeout);

        let headers = request.headers_mut();
        for (name, value) in &self.headers {
            let header_name = HeaderName::from_bytes(name.as_bytes())?;
            let header_value = HeaderValue::from_str(value)
                .map_err(|_| RequestError::HeaderValue(name.clone()))?;
            headers.insert(header_name, header_value);
        }
        headers.insert(AUTHORIZATION, inner.credentials.header_value()?);

        if let Some(body) = self.body {
            *request.body_mut() = Some(body.into());
        }

        if inner.log_level >= LogLevel::Info {
            tracing::debug!(
                "Request {}: {}{}",
                request.method(),
                request.url().host_str().unwrap_or_default(),
                request.url().path()
            );
        }

        Ok(request)
    }
}
