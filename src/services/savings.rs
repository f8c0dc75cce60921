use sqlx::SqlitePool;

use crate::error::AppError;
use crate::models::{Savings, SavingsForm, SavingsId};

const SELECT_SAVINGS: &str =
    "SELECT id, date, account_name, type, contribution, current_value, notes FROM savings";

pub async fn list(pool: &SqlitePool) -> Result<Vec<Savings>, AppError> {
    let rows = sqlx::query_as::<_, Savings>(&format!("{SELECT_SAVINGS} ORDER BY date DESC, id DESC"))
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

pub async fn get(pool: &SqlitePool, id: SavingsId) -> Result<Option<Savings>, AppError> {
    let row = sqlx::query_as::<_, Savings>(&format!("{SELECT_SAVINGS} WHERE id = ?1"))
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

pub async fn insert(pool: &SqlitePool, form: &SavingsForm) -> Result<SavingsId, AppError> {
    let id = sqlx::query(
        r#"
        INSERT INTO savings (date, account_name, type, contribution, current_value, notes)
        VALUES (?1, ?2, ?3, ?4, ?5, ?6)
        "#,
    )
    .bind(form.date)
    .bind(&form.account_name)
    .bind(&form.r#type)
    .bind(form.contribution.to_string())
    .bind(form.current_value.to_string())
    .bind(form.notes.as_deref())
    .execute(pool)
    .await?
    .last_insert_rowid();

    tracing::info!(id, account = %form.account_name, "Recorded savings contribution");
    Ok(id)
}

pub async fn update(pool: &SqlitePool, id: SavingsId, form: &SavingsForm) -> Result<(), AppError> {
    let result = sqlx::query(
        r#"
        UPDATE savings
        SET date = ?1, account_name = ?2, type = ?3, contribution = ?4, current_value = ?5, notes = ?6
        WHERE id = ?7
        "#,
    )
    .bind(form.date)
    .bind(&form.account_name)
    .bind(&form.r#type)
    .bind(form.contribution.to_string())
    .bind(form.current_value.to_string())
    .bind(form.notes.as_deref())
    .bind(id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::not_found("Savings"));
    }
    Ok(())
}

pub async fn delete(pool: &SqlitePool, id: SavingsId) -> Result<(), AppError> {
    let result = sqlx::query("DELETE FROM savings WHERE id = ?1")
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::not_found("Savings"));
    }
    tracing::info!(id, "Deleted savings record");
    Ok(())
}
