use crate::common::test_context::TestContext;
use flip_rust::{
    client::Credentials,
    error::ApiError,
    Error, FlipClient,
};

#[tokio::test]
async fn list_banks_is_sorted_by_name() {
    let ctx = TestContext::start().await;

    let banks = ctx.client.general.list_banks(None).await.unwrap();

    assert!(!banks.is_empty());
    assert!(banks.windows(2).all(|w| w[0].name <= w[1].name));
}

#[tokio::test]
async fn list_banks_with_code() {
    let ctx = TestContext::start().await;

    let banks = ctx.client.general.list_banks(Some("bni")).await.unwrap();

    assert_eq!(banks.len(), 1);
    assert_eq!(banks[0].bank_code, "bni");
}

#[tokio::test]
async fn balance() {
    let ctx = TestContext::start().await;

    let balance = ctx.client.general.balance().await.unwrap();

    assert!(balance.balance >= 0);
}

#[tokio::test]
async fn service_status() {
    let ctx = TestContext::start().await;

    ctx.client.general.operational_status().await.unwrap();
    ctx.client.general.maintenance_status().await.unwrap();
}

#[tokio::test]
async fn invalid_credentials_are_rejected() {
    let ctx = TestContext::start().await;
    let client = FlipClient::builder(Credentials::secret_key("invalid-secret-key"))
        .with_environment(ctx.flip_environment())
        .build();

    let err = client.general.balance().await.unwrap_err();

    match err {
        Error::ApiError(ApiError::General { status, error }) => {
            assert_eq!(status, 401);
            assert_eq!(error.status, 401);
        }
        e => panic!("Unexpected error: {}", e),
    }
}
