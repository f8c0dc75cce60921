use axum::{
    extract::{Path, State},
    response::{Json, Redirect},
    Form,
};
use serde::Serialize;

use crate::error::AppError;
use crate::models::{Expense, ExpenseForm, ExpenseId, LoanLease};
use crate::services::{expenses, loans_leases};
use crate::AppState;

/// Expense list plus the loans/leases an expense can be linked to.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpensesView {
    pub title: &'static str,
    pub records: Vec<Expense>,
    pub editing: Option<Expense>,
    pub loans_leases: Vec<LoanLease>,
}

async fn view(state: &AppState, editing: Option<Expense>) -> Result<ExpensesView, AppError> {
    Ok(ExpensesView {
        title: "Expenses",
        records: expenses::list(&state.db_pool).await?,
        editing,
        loans_leases: loans_leases::list(&state.db_pool).await?,
    })
}

pub async fn list_expenses(State(state): State<AppState>) -> Result<Json<ExpensesView>, AppError> {
    Ok(Json(view(&state, None).await?))
}

pub async fn edit_expense_view(
    State(state): State<AppState>,
    Path(id): Path<ExpenseId>,
) -> Result<Json<ExpensesView>, AppError> {
    let record = expenses::get(&state.db_pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("Expense"))?;
    Ok(Json(view(&state, Some(record)).await?))
}

pub async fn create_expense(
    State(state): State<AppState>,
    Form(form): Form<ExpenseForm>,
) -> Result<Redirect, AppError> {
    expenses::insert(&state.db_pool, &form).await?;
    Ok(Redirect::to("/expenses"))
}

pub async fn update_expense(
    State(state): State<AppState>,
    Path(id): Path<ExpenseId>,
    Form(form): Form<ExpenseForm>,
) -> Result<Redirect, AppError> {
    expenses::update(&state.db_pool, id, &form).await?;
    Ok(Redirect::to("/expenses"))
}

pub async fn delete_expense(
    State(state): State<AppState>,
    Path(id): Path<ExpenseId>,
) -> Result<Redirect, AppError> {
    expenses::delete(&state.db_pool, id).await?;
    Ok(Redirect::to("/expenses"))
}
