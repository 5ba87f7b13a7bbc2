use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use estancia_etl::pipeline;
use estancia_store::{app_config::Config, DbClient};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "estancia-etl")]
#[command(about = "Load the hotel CSV datasets into MongoDB")]
#[command(version)]
struct Cli {
    /// Directory containing the source CSV files
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Documents per insert batch
    #[arg(long)]
    batch_size: Option<usize>,

    /// Acknowledge that every target collection is dropped and reloaded
    #[arg(long)]
    confirm_replace: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "estancia_etl=info,estancia_store=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    if !cli.confirm_replace {
        anyhow::bail!(
            "this run drops and reloads every target collection; pass --confirm-replace to proceed"
        );
    }

    let config = Config::load().context("failed to load configuration")?;
    let data_dir = cli.data_dir.unwrap_or_else(|| config.data.root.clone());
    let batch_size = cli.batch_size.unwrap_or(config.loader.batch_size);

    tracing::info!("Starting hotel dataset load from {}", data_dir.display());

    // Connection failure is the only fatal abort
    let db = DbClient::connect(&config.mongo.uri, &config.mongo.database)
        .await
        .context("failed to connect to MongoDB")?;

    let summary = pipeline::run(&db, &data_dir, batch_size).await;
    tracing::info!(
        "Load complete: {} hotels, {} rooms, {} services, {} indexes",
        summary.hotels_loaded,
        summary.rooms_loaded,
        summary.room_services_loaded + summary.hotel_services_loaded,
        summary.indexes_built
    );

    Ok(())
}
