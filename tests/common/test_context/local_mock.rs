use crate::common::mock_server::FlipMockServer;
use flip_rust::{
    client::{Credentials, Environment},
    FlipClient,
};
use uuid::Uuid;

pub struct TestContext {
    pub client: FlipClient,
    mock_server: FlipMockServer,
}

impl TestContext {
    pub async fn start() -> Self {
        // Generate a new random secret key for this specific test
        let secret_key = Uuid::new_v4().to_string();

        // Setup a new mock server
        let mock_server = FlipMockServer::start(&secret_key).await;

        // Configure a new FlipClient to point to the mock server
        let client = FlipClient::builder(Credentials::secret_key(secret_key))
            .with_environment(Environment::Custom(mock_server.url().clone()))
            .build();

        Self {
            client,
            mock_server,
        }
    }

    pub fn flip_environment(&self) -> Environment {
        Environment::Custom(self.mock_server.url().clone())
    }
}
