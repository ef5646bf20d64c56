//! # Reelist Server
//!
//! Addon server for a hand-picked watchlist catalog.
//!
//! Serves two fixed catalogs (movies, series) from a local JSON file,
//! with year filtering, multi-criterion sorting, and pagination handled
//! by the `reelist-core` query engine. The catalog is read-only for the
//! process lifetime; restart to pick up file changes.

use anyhow::Context;
use clap::Parser;
use reelist_server::{
    AppState, Config, loader::load_catalog, manifest::build_manifest,
    routes::create_router,
};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// CLI entry point
#[derive(Parser, Debug)]
#[command(name = "reelist-server")]
#[command(about = "Watchlist catalog addon server")]
struct Cli {
    /// Server port (overrides config)
    #[arg(short, long, env = "PORT")]
    port: Option<u16>,

    /// Server host (overrides config)
    #[arg(long, env = "HOST")]
    host: Option<String>,

    /// Path to the catalog JSON file (overrides config)
    #[arg(long, env = "CATALOG_FILE")]
    catalog_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut config = Config::from_env()?;
    if let Some(port) = cli.port {
        config.port = port;
    }
    if let Some(host) = cli.host {
        config.host = host;
    }
    if let Some(catalog_file) = cli.catalog_file {
        config.catalog_file = catalog_file;
    }

    let store = load_catalog(&config.catalog_file);
    let manifest = build_manifest(&store);
    let app = create_router(AppState::new(store, manifest));

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("listening on {addr}");

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
