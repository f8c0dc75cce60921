use axum::{
    extract::{Query, State},
    response::Json,
};
use serde::Deserialize;

use crate::error::AppError;
use crate::models::{DashboardSummary, LoanLeaseProgress};
use crate::services::metrics;
use crate::utils::date::{self, DateRange};
use crate::AppState;

/// `?startDate=YYYY-MM-DD&endDate=YYYY-MM-DD`. Kept as raw strings so a malformed
/// bound falls back to the default window instead of rejecting the request.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRangeQuery {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

impl DateRangeQuery {
    pub fn resolve(&self, default_months: u32) -> Result<DateRange, AppError> {
        DateRange::resolve(
            self.start_date.as_deref(),
            self.end_date.as_deref(),
            date::today(),
            default_months,
        )
    }
}

pub async fn dashboard(
    State(state): State<AppState>,
    Query(query): Query<DateRangeQuery>,
) -> Result<Json<DashboardSummary>, AppError> {
    let range = query.resolve(state.config.default_range_months)?;
    tracing::debug!(start = %range.start_date, end = %range.end_date, "Building dashboard");

    let summary = metrics::dashboard(&state.db_pool, range).await?;
    Ok(Json(summary))
}

pub async fn loan_lease_progress(
    State(state): State<AppState>,
    Query(query): Query<DateRangeQuery>,
) -> Result<Json<Vec<LoanLeaseProgress>>, AppError> {
    let range = query.resolve(state.config.default_range_months)?;
    let progress = metrics::loan_lease_progress(&state.db_pool, &range).await?;
    Ok(Json(progress))
}
