use std::sync::Arc;

use anyhow::Context;
use tracing::info;

use catalog_service::{build_router, catalog::Catalog, config::Config, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present (ignored in production where env vars are injected)
    dotenv::dotenv().ok();

    // Structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,catalog_service=debug".parse().unwrap()),
        )
        .with_target(false)
        .compact()
        .init();

    let config = Config::from_env()?;

    info!("╔══════════════════════════════════════╗");
    info!("║  Catalog Service  —  Rust + Axum     ║");
    info!("║  read-only product lookup API        ║");
    info!("╚══════════════════════════════════════╝");

    // The catalog is loaded exactly once; a bad record aborts startup rather
    // than surfacing as a per-request failure later.
    let catalog = Catalog::load(&config.catalog_path).with_context(|| {
        format!(
            "failed to load catalog from {}",
            config.catalog_path.display()
        )
    })?;
    info!(
        count = catalog.len(),
        path = %config.catalog_path.display(),
        "Catalog loaded"
    );

    let state = AppState {
        catalog: Arc::new(catalog),
    };

    let app = build_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    info!("Listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
