//! API route definitions.

use axum::Router;

use crate::AppState;

pub mod conversions;
pub mod currencies;
pub mod health;
pub mod inflation;

/// Creates the API router with all routes.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(conversions::routes())
        .merge(currencies::routes())
        .merge(inflation::routes())
}
