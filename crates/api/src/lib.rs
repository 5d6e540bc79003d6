//! HTTP API layer with Axum routes.
//!
//! This crate provides:
//! - REST API routes over the conversion engine
//! - Error-to-response mapping

pub mod error;
pub mod routes;

use axum::Router;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use valora_core::InflationAdjuster;

pub use error::ApiError;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Conversion engine over the loaded reference data.
    pub adjuster: Arc<InflationAdjuster>,
}

impl AppState {
    /// Creates application state around an adjuster.
    #[must_use]
    pub fn new(adjuster: InflationAdjuster) -> Self {
        Self {
            adjuster: Arc::new(adjuster),
        }
    }
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
