//! Circulation Desk Server
//!
//! Loads the catalog, then serves search, borrow and return over HTTP.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use circulation_desk::{
    api,
    config::AppConfig,
    import,
    repository::{CodeGenerator, Repository},
    services::Services,
    AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load().context("Failed to load configuration")?;

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("circulation_desk={},tower_http=debug", config.logging.level).into());

    let (pretty, json) = if config.logging.format.eq_ignore_ascii_case("json") {
        (None, Some(tracing_subscriber::fmt::layer().json()))
    } else {
        (Some(tracing_subscriber::fmt::layer()), None)
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(pretty)
        .with(json)
        .init();

    tracing::info!("Starting Circulation Desk v{}", env!("CARGO_PKG_VERSION"));

    // Load the catalog; a missing file leaves the catalog empty
    let parsed = import::load_catalog_or_empty(&config.catalog.path).await;
    if parsed.catalog.is_empty() {
        tracing::warn!("Catalog is empty; nothing can be borrowed until it is reloaded");
    }

    // Create repository and services
    let codes = CodeGenerator::new(config.ledger.code_width, config.ledger.max_code);
    let repository = Repository::new(parsed, codes);

    let seeded = repository
        .ledger
        .seed_loans(&config.catalog.loaned_titles)
        .context("Failed to mark pre-loaned titles")?;
    for loan in &seeded {
        tracing::info!("\"{}\" starts on loan under request {}", loan.title, loan.code);
    }

    let services = Services::new(repository, &config.catalog.path);

    // Save server address before moving config
    let server_host = config.server.host.clone();
    let server_port = config.server.port;

    // Create application state
    let state = AppState {
        config: Arc::new(config),
        services: Arc::new(services),
    };

    // Build router
    let app = api::create_router(state);

    // Start server
    let addr = SocketAddr::new(
        server_host.parse().context("Invalid host address")?,
        server_port,
    );

    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
