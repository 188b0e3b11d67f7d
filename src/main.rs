//! Flandeur storefront server.

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use flandeur::adapters::catalogue::{EmbeddedCatalogue, YamlFileCatalogue};
use flandeur::adapters::checkout::UnavailableCheckout;
use flandeur::adapters::contact::LoggingContactDelivery;
use flandeur::adapters::http::{app_router, StorefrontAppState, StorefrontSettings};
use flandeur::adapters::storage::InMemoryCartRepository;
use flandeur::config::AppConfig;
use flandeur::ports::CatalogueSource;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    let config = AppConfig::load()?;
    init_tracing(&config);
    config.validate()?;

    let source: Box<dyn CatalogueSource> = match &config.catalogue.path {
        Some(path) => Box::new(YamlFileCatalogue::new(path)),
        None => Box::new(EmbeddedCatalogue),
    };
    let catalogue = source.load().await?;
    tracing::info!(
        source = %source.describe(),
        categories = catalogue.categories().len(),
        products = catalogue.products().len(),
        "Catalogue loaded"
    );

    let state = StorefrontAppState::new(
        catalogue,
        Arc::new(InMemoryCartRepository::new()),
        Arc::new(LoggingContactDelivery::new()),
        Arc::new(UnavailableCheckout::default()),
        StorefrontSettings::from(&config),
    );
    let app = app_router(state, &config.server);

    let addr = config.server.socket_addr()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, environment = ?config.server.environment, "Flandeur listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// JSON logs in production, human-readable otherwise. `RUST_LOG` wins over
/// the configured filter when set.
fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    let registry = tracing_subscriber::registry().with(filter);
    if config.is_production() {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
