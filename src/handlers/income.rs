use axum::{
    extract::{Path, State},
    response::{Json, Redirect},
    Form,
};

use super::ListView;
use crate::error::AppError;
use crate::models::{Income, IncomeForm, IncomeId};
use crate::services::income;
use crate::AppState;

const TITLE: &str = "Income";

pub async fn list_income(State(state): State<AppState>) -> Result<Json<ListView<Income>>, AppError> {
    let records = income::list(&state.db_pool).await?;
    Ok(Json(ListView::new(TITLE, records)))
}

pub async fn edit_income_view(
    State(state): State<AppState>,
    Path(id): Path<IncomeId>,
) -> Result<Json<ListView<Income>>, AppError> {
    let record = income::get(&state.db_pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("Income"))?;
    let records = income::list(&state.db_pool).await?;
    Ok(Json(ListView::new(TITLE, records).editing(record)))
}

pub async fn create_income(
    State(state): State<AppState>,
    Form(form): Form<IncomeForm>,
) -> Result<Redirect, AppError> {
    income::insert(&state.db_pool, &form).await?;
    Ok(Redirect::to("/income"))
}

pub async fn update_income(
    State(state): State<AppState>,
    Path(id): Path<IncomeId>,
    Form(form): Form<IncomeForm>,
) -> Result<Redirect, AppError> {
    income::update(&state.db_pool, id, &form).await?;
    Ok(Redirect::to("/income"))
}

pub async fn delete_income(
    State(state): State<AppState>,
    Path(id): Path<IncomeId>,
) -> Result<Redirect, AppError> {
    income::delete(&state.db_pool, id).await?;
    Ok(Redirect::to("/income"))
}
