//! Page routes

pub mod health;
pub mod quote;

use axum::{response::Redirect, routing::get, Router};

use crate::error::AppError;
use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(|| async { Redirect::to("/residential/quote") }))
        .route("/residential/quote", get(quote::quote_page))
        .route("/health", get(health::health))
}

/// Fallback for unknown paths
pub async fn not_found() -> AppError {
    AppError::NotFound
}
