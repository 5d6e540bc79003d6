//! Inflation series routes.

use axum::{
    Json, Router,
    extract::{Query, State, rejection::QueryRejection},
    routing::get,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use valora_core::{ConversionError, InflationSeries};

use crate::{AppState, error::ApiError};

/// Creates the inflation routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/inflation", get(series_summary))
        .route("/inflation/factor", get(cumulative_factor))
}

/// Response describing the loaded series.
#[derive(Debug, Serialize)]
pub struct SeriesSummaryResponse {
    /// Number of monthly records.
    pub records: usize,
    /// Oldest period.
    pub first_period: NaiveDate,
    /// Newest period.
    pub last_period: NaiveDate,
    /// Earliest date a conversion can start from.
    pub observed_from: NaiveDate,
    /// Latest date a conversion can start from.
    pub today: NaiveDate,
}

/// Query parameters for a factor lookup.
#[derive(Debug, Deserialize)]
pub struct FactorQuery {
    /// Start of the range.
    pub from: NaiveDate,
    /// End of the range (defaults to the last period).
    pub to: Option<NaiveDate>,
}

/// Response for a factor lookup.
#[derive(Debug, Serialize)]
pub struct FactorResponse {
    /// Start of the range.
    pub from: NaiveDate,
    /// End of the range.
    pub to: NaiveDate,
    /// First period whose rate is counted.
    pub first_counted_period: Option<NaiveDate>,
    /// Records counted.
    pub periods: usize,
    /// Cumulative inflation factor.
    pub factor: String,
}

/// GET `/inflation` - Describe the loaded series.
async fn series_summary(State(state): State<AppState>) -> Json<SeriesSummaryResponse> {
    let series = state.adjuster.series();
    let (observed_from, today) = series.observed_range();

    Json(SeriesSummaryResponse {
        records: series.len(),
        first_period: series.first_period(),
        last_period: series.today(),
        observed_from,
        today,
    })
}

/// GET `/inflation/factor?from=&to=` - Cumulative factor over a range.
async fn cumulative_factor(
    State(state): State<AppState>,
    query: Result<Query<FactorQuery>, QueryRejection>,
) -> Result<Json<FactorResponse>, ApiError> {
    let Query(query) = query?;
    let series = state.adjuster.series();
    let to = query.to.unwrap_or_else(|| series.today());

    for date in [query.from, to] {
        check_covered(series, date)?;
    }

    let factor = series.cumulative_factor(query.from, to)?;

    Ok(Json(FactorResponse {
        from: query.from,
        to,
        first_counted_period: InflationSeries::first_counted_period(query.from),
        periods: series.select(query.from, to).len(),
        factor: factor.normalize().to_string(),
    }))
}

fn check_covered(series: &InflationSeries, date: NaiveDate) -> Result<(), ConversionError> {
    if series.covers(date) {
        return Ok(());
    }
    let (observed_from, today) = series.observed_range();
    Err(ConversionError::DateOutOfRange {
        date,
        observed_from,
        today,
    })
}
