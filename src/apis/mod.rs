//! Clients for the various Flip APIs.

use crate::{
    client::{Credentials, Environment, LogLevel},
    transport::HttpOptions,
};
use reqwest_middleware::ClientWithMiddleware;
use std::fmt::{Debug, Formatter};

pub mod disbursements;
pub mod general;

pub(crate) struct FlipClientInner {
    pub(crate) client: ClientWithMiddleware,
    pub(crate) environment: Environment,
    pub(crate) credentials: Credentials,
    pub(crate) http_options: HttpOptions,
    pub(crate) log_level: LogLevel,
}

impl Debug for FlipClientInner {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FlipClientInner")
            .field("environment", &self.environment)
            .field("http_options", &self.http_options)
            .field("log_level", &self.log_level)
            .finish_non_exhaustive()
    }
}
