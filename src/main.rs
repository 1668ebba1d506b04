//! pizza-api service binary
//!
//! Usage: `pizza-api [config.yaml]`

use anyhow::Result;
use pizza_api::config::ServiceConfig;
use pizza_api::server::ServerBuilder;
use pizza_api::storage::InMemoryOrderStore;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let config = ServiceConfig::load(std::env::args().nth(1).as_deref())?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_filter)),
        )
        .init();

    ServerBuilder::new()
        .with_store(InMemoryOrderStore::new())
        .serve(&config.bind_addr)
        .await
}
