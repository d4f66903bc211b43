use anyhow::Context;
use flip_rust::{
    client::{Credentials, Environment},
    FlipClient,
};

#[derive(serde::Deserialize, Debug)]
struct Config {
    secret_key: String,
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

    let flip = FlipClient::builder(Credentials::secret_key(config.secret_key))
        .with_environment(Environment::Sandbox)
        .build();

    let operational = flip.general.operational_status().await?;
    let maintenance = flip.general.maintenance_status().await?;
    tracing::info!(
        "Flip operational: {}, under maintenance: {}",
        operational.operational,
        maintenance.maintenance
    );

    let balance = flip.general.balance().await?;
    tracing::info!("Balance: IDR {}", balance.balance);

    for bank in flip.general.list_banks(None).await? {
        tracing::info!(
            "{:<30} {:<12} fee {:>6} queue {:>4} {:?}",
            bank.name,
            bank.bank_code,
            bank.fee,
            bank.queue,
            bank.status
        );
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_max_level(tracing::Level::INFO)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("Setting default subscriber failed");

    if let Err(e) = run().await {
        tracing::error!("Fatal error: {:?}", e);
        std::process::exit(1);
    }
}
