//! Purchasing-power conversion routes.

use std::str::FromStr;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    routing::post,
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::info;
use valora_core::{ConversionRequest, ConversionResult, Direction};
use valora_shared::AppError;

use crate::{AppState, error::ApiError};

/// Creates the conversion routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/conversions", post(convert))
}

/// Request body for a conversion.
#[derive(Debug, Deserialize)]
pub struct ConvertRequest {
    /// Amount as a decimal string (e.g. "100.50").
    pub amount: String,
    /// Historical date of the amount.
    pub date: NaiveDate,
    /// `past_to_present` or `present_to_past`.
    pub direction: Direction,
}

/// Dates spanned by a conversion.
#[derive(Debug, Serialize)]
pub struct PeriodResponse {
    /// Requested date.
    pub from: NaiveDate,
    /// Last period of the dataset.
    pub to: NaiveDate,
}

/// Response for a conversion.
#[derive(Debug, Serialize)]
pub struct ConversionResponse {
    /// Amount that was converted.
    pub amount: String,
    /// Requested date.
    pub date: NaiveDate,
    /// Conversion direction.
    pub direction: Direction,
    /// Currency in circulation on the requested date.
    pub currency: String,
    /// Redenomination effect only; `null` when it leaves the decimal range.
    pub nominal_equivalent: Option<String>,
    /// Inflation effect only.
    pub inflation_only_equivalent: String,
    /// Both effects combined.
    pub combined_equivalent: String,
    /// Cumulative inflation factor over the period.
    pub cumulative_factor: String,
    /// Zeros removed between the date and today.
    pub zeros_removed: u32,
    /// Dates spanned by the conversion.
    pub period_covered: PeriodResponse,
}

impl From<ConversionResult> for ConversionResponse {
    fn from(result: ConversionResult) -> Self {
        Self {
            amount: result.amount.to_string(),
            date: result.date,
            direction: result.direction,
            currency: result.currency_label.to_string(),
            nominal_equivalent: result
                .nominal_equivalent
                .map(|nominal| nominal.normalize().to_string()),
            inflation_only_equivalent: result.inflation_only_equivalent.normalize().to_string(),
            combined_equivalent: result.combined_equivalent.normalize().to_string(),
            cumulative_factor: result.cumulative_factor.normalize().to_string(),
            zeros_removed: result.zeros_removed,
            period_covered: PeriodResponse {
                from: result.period_covered.from,
                to: result.period_covered.to,
            },
        }
    }
}

/// POST `/conversions` - Convert an amount between a date and today.
async fn convert(
    State(state): State<AppState>,
    payload: Result<Json<ConvertRequest>, JsonRejection>,
) -> Result<Json<ConversionResponse>, ApiError> {
    let Json(payload) = payload?;
    let amount = Decimal::from_str(payload.amount.trim())
        .map_err(|_| AppError::Validation(format!("Invalid amount: {}", payload.amount)))?;

    let request = ConversionRequest::new(amount, payload.date, payload.direction);
    let result = state.adjuster.convert(&request)?;

    info!(
        date = %result.date,
        direction = %result.direction,
        currency = result.currency_label,
        factor = %result.cumulative_factor,
        "Conversion computed"
    );

    Ok(Json(result.into()))
}
