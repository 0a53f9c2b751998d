use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

/// The only error a handler can surface: a lookup found no record.
/// Clients always see the same plain-text 404 body.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Product not found")]
    NotFound,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound => (StatusCode::NOT_FOUND, "Product not found").into_response(),
        }
    }
}
