use std::time::Duration;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "adwatch-cli")]
#[command(about = "Political ad spend dashboard command line interface")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Run pending migrations and insert the demo dataset.
    Seed,
    /// Compute the dashboard snapshot and print it as JSON.
    Stats,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let config = adwatch_core::load_app_config()?;
    let pool_config = adwatch_db::PoolConfig::from_app_config(&config);
    let pool = adwatch_db::connect_pool(&config.database_url, pool_config).await?;

    match cli.command {
        Commands::Seed => {
            let applied = adwatch_db::run_migrations(&pool).await?;
            let inserted = adwatch_db::seed_demo_data(&pool).await?;
            println!("applied {applied} migrations, inserted {inserted} demo ads");
        }
        Commands::Stats => {
            let store = adwatch_db::PgRecordStore::new(pool);
            let engine = adwatch_engine::AggregationEngine::with_probe_timeout(
                store,
                Duration::from_secs(config.store_probe_timeout_secs),
            );
            let stats = engine.collect().await?;
            println!("{}", serde_json::to_string_pretty(&stats)?);
        }
    }

    Ok(())
}
