use anyhow::Context;
use std::{env, path::PathBuf};

/// Server configuration loaded via environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Path to the catalog source file (two named lists, movies/series).
    pub catalog_file: PathBuf,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        Ok(Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "7010".to_string())
                .parse()
                .context("PORT must be a valid port number")?,
            catalog_file: env::var("CATALOG_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("data/catalog.json")),
        })
    }
}
