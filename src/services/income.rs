use sqlx::SqlitePool;

use crate::error::AppError;
use crate::models::{Income, IncomeForm, IncomeId};

pub async fn list(pool: &SqlitePool) -> Result<Vec<Income>, AppError> {
    let rows = sqlx::query_as::<_, Income>(
        "SELECT id, date, source, amount, type, notes FROM income ORDER BY date DESC, id DESC",
    )
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn get(pool: &SqlitePool, id: IncomeId) -> Result<Option<Income>, AppError> {
    let row = sqlx::query_as::<_, Income>(
        "SELECT id, date, source, amount, type, notes FROM income WHERE id = ?1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

pub async fn insert(pool: &SqlitePool, form: &IncomeForm) -> Result<IncomeId, AppError> {
    let id = sqlx::query(
        "INSERT INTO income (date, source, amount, type, notes) VALUES (?1, ?2, ?3, ?4, ?5)",
    )
    .bind(form.date)
    .bind(&form.source)
    .bind(form.amount.to_string())
    .bind(form.r#type.as_deref())
    .bind(form.notes.as_deref())
    .execute(pool)
    .await?
    .last_insert_rowid();

    tracing::info!(id, amount = %form.amount, "Recorded income");
    Ok(id)
}

pub async fn update(pool: &SqlitePool, id: IncomeId, form: &IncomeForm) -> Result<(), AppError> {
    let result = sqlx::query(
        "UPDATE income SET date = ?1, source = ?2, amount = ?3, type = ?4, notes = ?5 WHERE id = ?6",
    )
    .bind(form.date)
    .bind(&form.source)
    .bind(form.amount.to_string())
    .bind(form.r#type.as_deref())
    .bind(form.notes.as_deref())
    .bind(id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::not_found("Income"));
    }
    Ok(())
}

pub async fn delete(pool: &SqlitePool, id: IncomeId) -> Result<(), AppError> {
    let result = sqlx::query("DELETE FROM income WHERE id = ?1")
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::not_found("Income"));
    }
    tracing::info!(id, "Deleted income");
    Ok(())
}
