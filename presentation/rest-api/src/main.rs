use dotenvy::dotenv;

mod api;
mod config;
mod setup;

use config::app_config::AppConfig;
use setup::{dependency_injection::DependencyContainer, server::Server};

/// Storefront entry point
///
/// Serves the storefront pages and the read-only catalog/translation API.
/// - config/: Application configuration (server, CORS, storage locations)
/// - setup/: Dependency injection, fallback middleware and server setup
/// - api/: Route handlers and DTOs
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize tracing with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // 2. Load environment variables
    dotenv().ok();

    // 3. Load configuration
    let config = AppConfig::from_env();

    // 4. Prepare data, template and static directories
    config.storage.ensure_directories()?;

    // 5. Wire dependencies
    let container = DependencyContainer::new(&config.storage);

    // 6. Run server
    Server::run(config, container).await?;

    Ok(())
}
