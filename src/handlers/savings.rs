use axum::{
    extract::{Path, State},
    response::{Json, Redirect},
    Form,
};

use super::ListView;
use crate::error::AppError;
use crate::models::{Savings, SavingsForm, SavingsId};
use crate::services::savings;
use crate::AppState;

const TITLE: &str = "Savings";

pub async fn list_savings(State(state): State<AppState>) -> Result<Json<ListView<Savings>>, AppError> {
    let records = savings::list(&state.db_pool).await?;
    Ok(Json(ListView::new(TITLE, records)))
}

pub async fn edit_savings_view(
    State(state): State<AppState>,
    Path(id): Path<SavingsId>,
) -> Result<Json<ListView<Savings>>, AppError> {
    let record = savings::get(&state.db_pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("Savings"))?;
    let records = savings::list(&state.db_pool).await?;
    Ok(Json(ListView::new(TITLE, records).editing(record)))
}

pub async fn create_savings(
    State(state): State<AppState>,
    Form(form): Form<SavingsForm>,
) -> Result<Redirect, AppError> {
    savings::insert(&state.db_pool, &form).await?;
    Ok(Redirect::to("/savings"))
}

pub async fn update_savings(
    State(state): State<AppState>,
    Path(id): Path<SavingsId>,
    Form(form): Form<SavingsForm>,
) -> Result<Redirect, AppError> {
    savings::update(&state.db_pool, id, &form).await?;
    Ok(Redirect::to("/savings"))
}

pub async fn delete_savings(
    State(state): State<AppState>,
    Path(id): Path<SavingsId>,
) -> Result<Redirect, AppError> {
    savings::delete(&state.db_pool, id).await?;
    Ok(Redirect::to("/savings"))
}
