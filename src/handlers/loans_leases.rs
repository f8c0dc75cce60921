use axum::{
    extract::{Path, State},
    response::{Json, Redirect},
    Form,
};

use super::ListView;
use crate::error::AppError;
use crate::models::{LoanLease, LoanLeaseForm, LoanLeaseId};
use crate::services::loans_leases;
use crate::AppState;

const TITLE: &str = "Loans & Leases";

pub async fn list_loans_leases(
    State(state): State<AppState>,
) -> Result<Json<ListView<LoanLease>>, AppError> {
    let records = loans_leases::list(&state.db_pool).await?;
    Ok(Json(ListView::new(TITLE, records)))
}

pub async fn edit_loan_lease_view(
    State(state): State<AppState>,
    Path(id): Path<LoanLeaseId>,
) -> Result<Json<ListView<LoanLease>>, AppError> {
    let record = loans_leases::get(&state.db_pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("Loan/Lease"))?;
    let records = loans_leases::list(&state.db_pool).await?;
    Ok(Json(ListView::new(TITLE, records).editing(record)))
}

pub async fn create_loan_lease(
    State(state): State<AppState>,
    Form(form): Form<LoanLeaseForm>,
) -> Result<Redirect, AppError> {
    loans_leases::insert(&state.db_pool, &form).await?;
    Ok(Redirect::to("/loans-leases"))
}

pub async fn update_loan_lease(
    State(state): State<AppState>,
    Path(id): Path<LoanLeaseId>,
    Form(form): Form<LoanLeaseForm>,
) -> Result<Redirect, AppError> {
    loans_leases::update(&state.db_pool, id, &form).await?;
    Ok(Redirect::to("/loans-leases"))
}

/// Also removes every expense linked to the loan/lease.
pub async fn delete_loan_lease(
    State(state): State<AppState>,
    Path(id): Path<LoanLeaseId>,
) -> Result<Redirect, AppError> {
    loans_leases::delete(&state.db_pool, id).await?;
    Ok(Redirect::to("/loans-leases"))
}
