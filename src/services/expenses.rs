//! Expense log. Writes run in a transaction together with the loan/lease
//! balance adjustments they imply.

use sqlx::{SqliteConnection, SqlitePool};

use super::balance_sync::{self, balance_effects};
use crate::error::AppError;
use crate::models::{Expense, ExpenseForm, ExpenseId};

const SELECT_EXPENSES: &str = r#"
    SELECT e.id, e.date, e.description, e.category, e.amount, e.payment_method, e.notes,
           e.loan_lease_id, ll.name AS loan_lease_name
    FROM expenses e
    LEFT JOIN loans_leases ll ON e.loan_lease_id = ll.id
"#;

pub async fn list(pool: &SqlitePool) -> Result<Vec<Expense>, AppError> {
    let rows = sqlx::query_as::<_, Expense>(&format!(
        "{SELECT_EXPENSES} ORDER BY e.date DESC, e.id DESC"
    ))
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn get(pool: &SqlitePool, id: ExpenseId) -> Result<Option<Expense>, AppError> {
    let mut conn = pool.acquire().await?;
    fetch(&mut conn, id).await
}

async fn fetch(conn: &mut SqliteConnection, id: ExpenseId) -> Result<Option<Expense>, AppError> {
    let row = sqlx::query_as::<_, Expense>(&format!("{SELECT_EXPENSES} WHERE e.id = ?1"))
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?;
    Ok(row)
}

pub async fn insert(pool: &SqlitePool, form: &ExpenseForm) -> Result<ExpenseId, AppError> {
    let mut tx = pool.begin().await?;

    let id = sqlx::query(
        r#"
        INSERT INTO expenses (date, description, category, amount, payment_method, notes, loan_lease_id)
        VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
        "#,
    )
    .bind(form.date)
    .bind(&form.description)
    .bind(&form.category)
    .bind(form.amount.to_string())
    .bind(form.payment_method.as_deref())
    .bind(form.notes.as_deref())
    .bind(form.loan_lease_id)
    .execute(&mut *tx)
    .await?
    .last_insert_rowid();

    let effects = balance_effects(None, form.loan_payment());
    balance_sync::apply(&mut tx, &effects).await?;

    tx.commit().await?;
    tracing::info!(id, category = %form.category, amount = %form.amount, "Recorded expense");
    Ok(id)
}

pub async fn update(pool: &SqlitePool, id: ExpenseId, form: &ExpenseForm) -> Result<(), AppError> {
    let mut tx = pool.begin().await?;

    let old = fetch(&mut tx, id)
        .await?
        .ok_or_else(|| AppError::not_found("Expense"))?;

    sqlx::query(
        r#"
        UPDATE expenses
        SET date = ?1, description = ?2, category = ?3, amount = ?4, payment_method = ?5,
            notes = ?6, loan_lease_id = ?7
        WHERE id = ?8
        "#,
    )
    .bind(form.date)
    .bind(&form.description)
    .bind(&form.category)
    .bind(form.amount.to_string())
    .bind(form.payment_method.as_deref())
    .bind(form.notes.as_deref())
    .bind(form.loan_lease_id)
    .bind(id)
    .execute(&mut *tx)
    .await?;

    let effects = balance_effects(old.loan_payment(), form.loan_payment());
    balance_sync::apply(&mut tx, &effects).await?;

    tx.commit().await?;
    tracing::info!(id, "Updated expense");
    Ok(())
}

pub async fn delete(pool: &SqlitePool, id: ExpenseId) -> Result<(), AppError> {
    let mut tx = pool.begin().await?;

    let old = fetch(&mut tx, id)
        .await?
        .ok_or_else(|| AppError::not_found("Expense"))?;

    let effects = balance_effects(old.loan_payment(), None);
    balance_sync::apply(&mut tx, &effects).await?;

    sqlx::query("DELETE FROM expenses WHERE id = ?1")
        .bind(id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;
    tracing::info!(id, "Deleted expense");
    Ok(())
}
