//! Liveness endpoint reporting how far the loaded dataset reaches.

use axum::{Json, Router, extract::State, routing::get};
use chrono::NaiveDate;
use serde::Serialize;

use crate::AppState;

/// Creates the health route.
pub fn routes() -> Router<AppState> {
    Router::new().route("/health", get(health))
}

/// Service status and dataset horizon.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Always `healthy` once the server is up.
    pub status: &'static str,
    /// Crate version.
    pub version: &'static str,
    /// Last period of the loaded series.
    pub data_through: NaiveDate,
}

/// GET `/health` - Report liveness.
async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        data_through: state.adjuster.today(),
    })
}
