use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use infinityapi::config::Config;
use infinityapi::router::AppState;
use infinityapi::{build_router, db};

#[derive(Parser)]
#[command(name = "infinityapi")]
#[command(about = "Release metadata and YBA/YBDB compatibility matrix API")]
#[command(version)]
struct Cli {
    /// Apply the schema script to the configured database and exit
    #[arg(long)]
    migrate: bool,

    /// Start the API server
    #[arg(long)]
    startserver: bool,

    /// Path to the configuration file
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// Path to the schema script used by --migrate
    #[arg(long, default_value = "schema.sql")]
    schema: PathBuf,
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();

    let cli = Cli::parse();
    let config = Config::from_file(&cli.config)
        .with_context(|| format!("failed to load config {}", cli.config.display()))?;

    if cli.migrate {
        let pool = db::connect(&config.db).await.context("migration failed")?;
        db::migrate(&pool, &cli.schema)
            .await
            .context("migration failed")?;
        pool.close().await;
        info!("Migration successful");
    } else if cli.startserver {
        let pool = db::connect(&config.db)
            .await
            .context("failed to connect to database")?;
        let app = build_router(AppState { pool });

        let address = config.server.address();
        let listener = tokio::net::TcpListener::bind(&address)
            .await
            .with_context(|| format!("failed to bind {address}"))?;
        info!("infinityapi listening on http://{address}");

        axum::serve(listener, app).await.context("server error")?;
    } else {
        info!("No command provided. Use --migrate or --startserver.");
    }

    Ok(())
}
