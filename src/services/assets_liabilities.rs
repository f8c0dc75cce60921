use sqlx::SqlitePool;

use crate::error::AppError;
use crate::models::{AssetsLiabilities, AssetsLiabilitiesForm, SnapshotId};

const SELECT_SNAPSHOTS: &str = r#"
    SELECT id, date, cash_bank, investments, property, vehicles, other_valuables,
           credit_card_debt, loans, mortgage, other_debts
    FROM assets_liabilities
"#;

pub async fn list(pool: &SqlitePool) -> Result<Vec<AssetsLiabilities>, AppError> {
    let rows = sqlx::query_as::<_, AssetsLiabilities>(&format!(
        "{SELECT_SNAPSHOTS} ORDER BY date DESC, id DESC"
    ))
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn get(pool: &SqlitePool, id: SnapshotId) -> Result<Option<AssetsLiabilities>, AppError> {
    let row = sqlx::query_as::<_, AssetsLiabilities>(&format!("{SELECT_SNAPSHOTS} WHERE id = ?1"))
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

/// The snapshot with the greatest date; the later-entered row wins a tie.
pub async fn latest(pool: &SqlitePool) -> Result<Option<AssetsLiabilities>, AppError> {
    let row = sqlx::query_as::<_, AssetsLiabilities>(&format!(
        "{SELECT_SNAPSHOTS} ORDER BY date DESC, id DESC LIMIT 1"
    ))
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

pub async fn insert(pool: &SqlitePool, form: &AssetsLiabilitiesForm) -> Result<SnapshotId, AppError> {
    let id = sqlx::query(
        r#"
        INSERT INTO assets_liabilities
        (date, cash_bank, investments, property, vehicles, other_valuables,
         credit_card_debt, loans, mortgage, other_debts)
        VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)
        "#,
    )
    .bind(form.date)
    .bind(form.cash_bank.to_string())
    .bind(form.investments.to_string())
    .bind(form.property.to_string())
    .bind(form.vehicles.to_string())
    .bind(form.other_valuables.to_string())
    .bind(form.credit_card_debt.to_string())
    .bind(form.loans.to_string())
    .bind(form.mortgage.to_string())
    .bind(form.other_debts.to_string())
    .execute(pool)
    .await?
    .last_insert_rowid();

    tracing::info!(id, date = %form.date, "Recorded assets & liabilities snapshot");
    Ok(id)
}

pub async fn update(
    pool: &SqlitePool,
    id: SnapshotId,
    form: &AssetsLiabilitiesForm,
) -> Result<(), AppError> {
    let result = sqlx::query(
        r#"
        UPDATE assets_liabilities
        SET date = ?1, cash_bank = ?2, investments = ?3, property = ?4, vehicles = ?5,
            other_valuables = ?6, credit_card_debt = ?7, loans = ?8, mortgage = ?9, other_debts = ?10
        WHERE id = ?11
        "#,
    )
    .bind(form.date)
    .bind(form.cash_bank.to_string())
    .bind(form.investments.to_string())
    .bind(form.property.to_string())
    .bind(form.vehicles.to_string())
    .bind(form.other_valuables.to_string())
    .bind(form.credit_card_debt.to_string())
    .bind(form.loans.to_string())
    .bind(form.mortgage.to_string())
    .bind(form.other_debts.to_string())
    .bind(id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::not_found("Assets & Liabilities"));
    }
    Ok(())
}

pub async fn delete(pool: &SqlitePool, id: SnapshotId) -> Result<(), AppError> {
    let result = sqlx::query("DELETE FROM assets_liabilities WHERE id = ?1")
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::not_found("Assets & Liabilities"));
    }
    tracing::info!(id, "Deleted assets & liabilities snapshot");
    Ok(())
}
