use anyhow::Context;
use flip_rust::{
    client::{Credentials, Environment},
    FlipClient,
};

#[derive(serde::Deserialize, Debug)]
struct AcceptanceTestsConfig {
    secret_key: String,
}

impl AcceptanceTestsConfig {
    /// Reads `FLIP_SECRET_KEY` from the environment.
    fn read() -> anyhow::Result<Self> {
        config::Config::builder()
            .add_source(config::Environment::with_prefix("FLIP"))
            .build()?
            .try_deserialize()
            .context("Missing acceptance tests configuration")
    }
}

pub struct TestContext {
    pub client: FlipClient,
}

impl TestContext {
    pub async fn start() -> Self {
        let config = AcceptanceTestsConfig::read().unwrap();

        // Configure a new FlipClient to point to Sandbox
        let client = FlipClient::builder(Credentials::secret_key(config.secret_key))
            .with_environment(Environment::Sandbox)
            .build();

        Self { client }
    }

    pub fn flip_environment(&self) -> Environment {
        Environment::Sandbox
    }
}
