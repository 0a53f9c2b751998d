use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub mod catalog;
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;

use crate::catalog::Catalog;

/// Shared application state — cheap to clone (catalog behind Arc).
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // ── Static pages ────────────────────────────────────────────────────
        .route("/", get(handlers::root))
        .route("/about", get(handlers::about))

        // ── Catalog lookups ─────────────────────────────────────────────────
        .route("/api/phone", get(handlers::products::list_contacts))
        .route(
            "/api/gmail/:gmail",
            get(handlers::products::get_product_by_gmail),
        )
        .route("/api/product/:id", get(handlers::products::get_product))
        .route("/api/find/query", get(handlers::products::find_products))

        // ── Middleware ──────────────────────────────────────────────────────
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
