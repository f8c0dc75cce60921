use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Redirect, Response},
    Form,
};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::models::{Budget, BudgetForm, BudgetLine};
use crate::services::budget;
use crate::utils::date;
use crate::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct MonthQuery {
    pub month: Option<String>,
}

impl MonthQuery {
    /// The requested "YYYY-MM", or the current month when absent or malformed.
    fn month(&self) -> String {
        self.month
            .as_deref()
            .and_then(date::parse_month)
            .unwrap_or_else(|| date::month_key(date::today()))
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetView {
    pub title: &'static str,
    pub month: String,
    pub records: Vec<BudgetLine>,
    pub editing: Option<Budget>,
}

async fn view(state: &AppState, month: String, editing: Option<Budget>) -> Result<BudgetView, AppError> {
    let records = budget::report(&state.db_pool, &month).await?;
    Ok(BudgetView {
        title: "Budget",
        month,
        records,
        editing,
    })
}

pub async fn budget_report(
    State(state): State<AppState>,
    Query(query): Query<MonthQuery>,
) -> Result<Json<BudgetView>, AppError> {
    Ok(Json(view(&state, query.month(), None).await?))
}

pub async fn edit_budget_view(
    State(state): State<AppState>,
    Path(category): Path<String>,
    Query(query): Query<MonthQuery>,
) -> Result<Json<BudgetView>, AppError> {
    let record = budget::get(&state.db_pool, &category)
        .await?
        .ok_or_else(|| AppError::not_found("Budget"))?;
    Ok(Json(view(&state, query.month(), Some(record)).await?))
}

pub async fn set_budget(
    State(state): State<AppState>,
    Form(form): Form<BudgetForm>,
) -> Result<Response, AppError> {
    let Some(category) = form.category else {
        return Ok((StatusCode::UNPROCESSABLE_ENTITY, "category is required").into_response());
    };
    budget::set(&state.db_pool, &category, form.budgeted_amount).await?;
    Ok(Redirect::to("/budget").into_response())
}

pub async fn update_budget(
    State(state): State<AppState>,
    Path(category): Path<String>,
    Form(form): Form<BudgetForm>,
) -> Result<Redirect, AppError> {
    budget::update(&state.db_pool, &category, form.budgeted_amount).await?;
    Ok(Redirect::to("/budget"))
}

pub async fn delete_budget(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> Result<Redirect, AppError> {
    budget::delete(&state.db_pool, &category).await?;
    Ok(Redirect::to("/budget"))
}
