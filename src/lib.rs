//! Golden Hour Cleaning Co. quote service
//!
//! Instant residential estimates, booking deep links and contact hand-offs.
//! Nothing is stored: every request is priced from the form input and the
//! process-wide pricing config.

pub mod cache;
pub mod config;
pub mod contact;
pub mod error;
pub mod pricing;
pub mod routes;

use std::sync::Arc;

use axum::{http::Method, Router};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use cache::AppCache;
use config::Config;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub cache: AppCache,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            cache: AppCache::new(config.quote_cache_ttl),
            config: Arc::new(config),
        }
    }
}

/// Build the full application router
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);

    let api = Router::new()
        .merge(pricing::router())
        .merge(contact::router())
        .layer(cors);

    Router::new()
        .merge(routes::router())
        .merge(api)
        .nest_service("/static", ServeDir::new(&state.config.static_dir))
        .fallback(routes::not_found)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
