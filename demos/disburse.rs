use anyhow::Context;
use flip_rust::{
    apis::disbursements::{
        BankAccountInquiryRequestBuilder, DisbursementRequestBuilder, InquiryStatus,
    },
    client::{Credentials, Environment, LogLevel},
    transport::HttpOptions,
    FlipClient,
};
use std::time::Duration;
use uuid::Uuid;

#[derive(serde::Deserialize, Debug)]
struct Config {
    secret_key: String,
    bank_code: String,
    account_number: String,
    amount: u64,
}

impl Config {
    fn read() -> anyhow::Result<Self> {
        config::Config::builder()
            .add_source(config::File::with_name("config").required(false))
            .add_source(config::Environment::with_prefix("FLIP"))
            .build()?
            .try_deserialize()
            .context("Failed to assemble the required configuration")
    }
}

async fn run() -> anyhow::Result<()> {
    let config = Config::read()?;

    // Setup Flip client, retrying network failures of idempotent calls
    let flip = FlipClient::builder(Credentials::secret_key(config.secret_key))
        .with_environment(Environment::Sandbox)
        .with_http_options(
            HttpOptions::default()
                .with_timeout(Duration::from_secs(30))
                .with_retry_count(3)
                .with_backoff_interval(Duration::from_millis(500)),
        )
        .with_log_level(LogLevel::Debug)
        .build();

    // Make sure the beneficiary account exists
    let inquiry = flip
        .disbursements
        .bank_account_inquiry(
            &BankAccountInquiryRequestBuilder::default()
                .bank_code(config.bank_code.clone())
                .account_number(config.account_number.clone())
                .build()?,
        )
        .await?;

    match inquiry.status {
        InquiryStatus::Success => {
            tracing::info!("Account holder: {}", inquiry.account_holder)
        }
        InquiryStatus::Pending => {
            tracing::info!("Inquiry still pending, disbursing anyway")
        }
        status => anyhow::bail!("Cannot disburse to this account: {:?}", status),
    }

    // Create the disbursement
    let idempotency_key = Uuid::new_v4().to_string();
    let disbursement = flip
        .disbursements
        .create(
            &idempotency_key,
            &DisbursementRequestBuilder::default()
                .bank_code(config.bank_code)
                .account_number(config.account_number)
                .amount(config.amount)
                .remark("flip-rust demo")
                .build()?,
        )
        .await?;

    tracing::info!(
        "Created disbursement {} with key {}: {:?}",
        disbursement.id,
        idempotency_key,
        disbursement.status
    );

    let queue = flip.disbursements.queue(disbursement.id).await?;
    tracing::info!("Position in queue: {}", queue.queue);

    let disbursement = flip.disbursements.get_by_id(disbursement.id).await?;
    tracing::info!("{:#?}", disbursement);

    Ok(())
}

#[tokio::main]
async fn main() {
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_max_level(tracing::Level::DEBUG)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("Setting default subscriber failed");

    if let Err(e) = run().await {
        tracing::error!("Fatal error: {:?}", e);
        std::process::exit(1);
    }
}
