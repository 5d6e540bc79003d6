//! Currency era routes.

use axum::{
    Json, Router,
    extract::{Query, State, rejection::QueryRejection},
    routing::get,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{AppState, error::ApiError};

/// Creates the currency routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/currencies", get(list_currencies))
        .route("/currencies/at", get(currency_at))
}

/// Response for a currency era.
#[derive(Debug, Serialize)]
pub struct CurrencyEraResponse {
    /// Currency name.
    pub name: String,
    /// First day in circulation (absent for the origin currency).
    pub start: Option<NaiveDate>,
    /// First day of the next currency (absent for the current one).
    pub end: Option<NaiveDate>,
    /// Zeros removed since the origin currency.
    pub zeros_since_origin: u32,
}

/// Response listing all eras.
#[derive(Debug, Serialize)]
pub struct CurrencyListResponse {
    /// Eras, oldest first.
    pub currencies: Vec<CurrencyEraResponse>,
}

/// Query parameters for a currency lookup.
#[derive(Debug, Deserialize)]
pub struct CurrencyAtQuery {
    /// Date to look up.
    pub date: NaiveDate,
}

/// Response for a currency lookup.
#[derive(Debug, Serialize)]
pub struct CurrencyAtResponse {
    /// Date looked up.
    pub date: NaiveDate,
    /// Currency in circulation.
    pub currency: String,
    /// Zeros removed between the origin currency and this date.
    pub zeros_since_origin: u32,
    /// Zeros removed between this date and today.
    pub zeros_until_present: u32,
}

/// GET `/currencies` - List all currency eras.
async fn list_currencies(State(state): State<AppState>) -> Json<CurrencyListResponse> {
    let currencies = state
        .adjuster
        .table()
        .eras()
        .into_iter()
        .map(|era| CurrencyEraResponse {
            name: era.name.to_string(),
            start: era.start,
            end: era.end,
            zeros_since_origin: era.zeros_since_origin,
        })
        .collect();

    Json(CurrencyListResponse { currencies })
}

/// GET `/currencies/at?date=YYYY-MM-DD` - Currency in circulation on a date.
async fn currency_at(
    State(state): State<AppState>,
    query: Result<Query<CurrencyAtQuery>, QueryRejection>,
) -> Result<Json<CurrencyAtResponse>, ApiError> {
    let Query(query) = query?;
    let table = state.adjuster.table();

    Ok(Json(CurrencyAtResponse {
        date: query.date,
        currency: table.currency_at(query.date).to_string(),
        zeros_since_origin: table.zeros_since_origin(query.date),
        zeros_until_present: table.zeros_until_present(query.date),
    }))
}
