use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use serde_json::Value;
use tracing::info;

use crate::{
    error::{AppError, AppResult},
    AppState,
};

// ── Contact listing ───────────────────────────────────────────────────────────

pub async fn list_contacts(State(state): State<AppState>) -> Json<Vec<Value>> {
    let cards: Vec<Value> = state
        .catalog
        .products()
        .iter()
        .map(|p| p.contact_card())
        .collect();

    info!(count = cards.len(), "Listed contacts");

    Json(cards)
}

// ── Lookup by email ───────────────────────────────────────────────────────────

pub async fn get_product_by_gmail(
    State(state): State<AppState>,
    Path(gmail): Path<String>,
) -> AppResult<Json<Value>> {
    let product = state
        .catalog
        .find_by_email(&gmail)
        .ok_or(AppError::NotFound)?;

    info!(email = %gmail, id = product.id, "Matched product by email");

    Ok(Json(product.record().clone()))
}

// ── Lookup by id ──────────────────────────────────────────────────────────────

pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Value>> {
    // A non-numeric id matches nothing; clients get the same 404 as for an
    // unknown id, never a parse error.
    let product = id
        .parse::<i64>()
        .ok()
        .and_then(|id| state.catalog.find_by_id(id))
        .ok_or(AppError::NotFound)?;

    info!(id = product.id, "Fetched product");

    Ok(Json(product.record().clone()))
}

// ── Search ────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize, Default)]
pub struct FindQuery {
    pub search: Option<String>,
    pub limit: Option<usize>,
}

pub async fn find_products(
    State(state): State<AppState>,
    Query(query): Query<FindQuery>,
) -> Json<Vec<Value>> {
    let matches = state.catalog.search(query.search.as_deref(), query.limit);

    info!(
        search = query.search.as_deref().unwrap_or(""),
        limit = ?query.limit,
        count = matches.len(),
        "Searched products"
    );

    Json(matches.into_iter().map(|p| p.record().clone()).collect())
}
