use sqlx::SqlitePool;

use crate::error::AppError;
use crate::models::{LoanLease, LoanLeaseForm, LoanLeaseId};

const SELECT_LOANS_LEASES: &str = r#"
    SELECT id, name, type, total_amount, monthly_installment, remaining_balance,
           start_date, end_date, notes
    FROM loans_leases
"#;

pub async fn list(pool: &SqlitePool) -> Result<Vec<LoanLease>, AppError> {
    let rows = sqlx::query_as::<_, LoanLease>(&format!("{SELECT_LOANS_LEASES} ORDER BY name, id"))
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

pub async fn get(pool: &SqlitePool, id: LoanLeaseId) -> Result<Option<LoanLease>, AppError> {
    let row = sqlx::query_as::<_, LoanLease>(&format!("{SELECT_LOANS_LEASES} WHERE id = ?1"))
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

pub async fn insert(pool: &SqlitePool, form: &LoanLeaseForm) -> Result<LoanLeaseId, AppError> {
    let id = sqlx::query(
        r#"
        INSERT INTO loans_leases
        (name, type, total_amount, monthly_installment, remaining_balance, start_date, end_date, notes)
        VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
        "#,
    )
    .bind(&form.name)
    .bind(&form.r#type)
    .bind(form.total_amount.to_string())
    .bind(form.monthly_installment.to_string())
    .bind(form.remaining_balance.to_string())
    .bind(form.start_date)
    .bind(form.end_date)
    .bind(form.notes.as_deref())
    .execute(pool)
    .await?
    .last_insert_rowid();

    tracing::info!(id, name = %form.name, "Added loan/lease");
    Ok(id)
}

/// Overwrites every field, `remaining_balance` included.
pub async fn update(pool: &SqlitePool, id: LoanLeaseId, form: &LoanLeaseForm) -> Result<(), AppError> {
    let result = sqlx::query(
        r#"
        UPDATE loans_leases
        SET name = ?1, type = ?2, total_amount = ?3, monthly_installment = ?4,
            remaining_balance = ?5, start_date = ?6, end_date = ?7, notes = ?8
        WHERE id = ?9
        "#,
    )
    .bind(&form.name)
    .bind(&form.r#type)
    .bind(form.total_amount.to_string())
    .bind(form.monthly_installment.to_string())
    .bind(form.remaining_balance.to_string())
    .bind(form.start_date)
    .bind(form.end_date)
    .bind(form.notes.as_deref())
    .bind(id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::not_found("Loan/Lease"));
    }
    Ok(())
}

/// Deletes the loan/lease together with every expense linked to it.
pub async fn delete(pool: &SqlitePool, id: LoanLeaseId) -> Result<(), AppError> {
    let mut tx = pool.begin().await?;

    let linked = sqlx::query("DELETE FROM expenses WHERE loan_lease_id = ?1")
        .bind(id)
        .execute(&mut *tx)
        .await?
        .rows_affected();

    let result = sqlx::query("DELETE FROM loans_leases WHERE id = ?1")
        .bind(id)
        .execute(&mut *tx)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::not_found("Loan/Lease"));
    }

    tx.commit().await?;
    tracing::info!(id, linked_expenses = linked, "Deleted loan/lease");
    Ok(())
}
