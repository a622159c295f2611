use std::process;
use std::sync::Arc;

use clap::Parser;
use sqlx::sqlite::SqlitePoolOptions;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use catalog_sync::cli::Cli;
use catalog_sync::config::AppConfig;
use catalog_sync::nuapi::NuApiHttpClient;
use catalog_sync::services::SyncService;
use catalog_sync::AppError;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let default_filter = if cli.verbose {
        "catalog_sync=debug"
    } else {
        "catalog_sync=info"
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| default_filter.to_string()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(e) = run(cli).await {
        error!(error = %e, "Catalog sync failed");
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), AppError> {
    let config = AppConfig::load(cli.config.as_deref())?;
    let plan = cli.plan();

    // one connection: the whole run is a single transaction
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect(&config.db.url)
        .await?;

    if cli.migrate {
        sqlx::migrate!("./migrations").run(&pool).await?;
        info!("Schema migrations applied");
    }

    let api = Arc::new(NuApiHttpClient::new(config.nuapi.clone())?);
    let service = SyncService::new(pool.clone(), api);
    let stats = service.run(&plan).await?;

    info!(
        "Done - terms: {}, schools: {}, subjects: {}, instructors: {} ({} links), buildings: {}, rooms: {}, courses: {} | duplicates skipped: {} | committed: {}",
        stats.terms,
        stats.schools,
        stats.subjects,
        stats.instructors,
        stats.instructor_subjects,
        stats.buildings,
        stats.rooms,
        stats.courses,
        stats.duplicates_skipped,
        stats.committed
    );

    pool.close().await;
    Ok(())
}
