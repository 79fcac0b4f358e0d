//! Orderdesk server binary
//!
//! Loads configuration (ORDERDESK_CONFIG points at a YAML file; defaults
//! apply otherwise), seeds the train catalogue, and serves both domain
//! APIs on one router.

use anyhow::Result;
use orderdesk::config::AppConfig;
use orderdesk::pharmacy::PharmacyService;
use orderdesk::railway::RailwayService;
use orderdesk::server::ServerBuilder;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = match std::env::var("ORDERDESK_CONFIG") {
        Ok(path) => AppConfig::from_yaml_file(&path)?,
        Err(_) => AppConfig::default(),
    };

    let railway = RailwayService::new();
    for seed in &config.trains {
        railway.add_train(seed.name.clone(), seed.status)?;
    }
    tracing::info!(trains = config.trains.len(), "railway service seeded");

    let pharmacy = PharmacyService::new();

    ServerBuilder::new()
        .with_railway(railway)
        .with_pharmacy(pharmacy)
        .serve(&config.bind)
        .await
}
