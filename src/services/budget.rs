//! Per-category budgets and the monthly budget-versus-actual report.

use std::collections::HashMap;

use rust_decimal::Decimal;
use sqlx::SqlitePool;

use crate::database::parse_amount;
use crate::error::AppError;
use crate::models::{Budget, BudgetLine};
use crate::utils::money;

pub async fn list(pool: &SqlitePool) -> Result<Vec<Budget>, AppError> {
    let rows = sqlx::query_as::<_, Budget>(
        "SELECT category, budgeted_amount FROM budget ORDER BY category",
    )
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn get(pool: &SqlitePool, category: &str) -> Result<Option<Budget>, AppError> {
    let row = sqlx::query_as::<_, Budget>(
        "SELECT category, budgeted_amount FROM budget WHERE category = ?1",
    )
    .bind(category)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

/// Insert or replace the budget for a category.
pub async fn set(pool: &SqlitePool, category: &str, budgeted_amount: Decimal) -> Result<(), AppError> {
    sqlx::query(
        r#"
        INSERT INTO budget (category, budgeted_amount) VALUES (?1, ?2)
        ON CONFLICT(category) DO UPDATE SET budgeted_amount = excluded.budgeted_amount
        "#,
    )
    .bind(category)
    .bind(budgeted_amount.to_string())
    .execute(pool)
    .await?;

    tracing::info!(category, amount = %budgeted_amount, "Budget set");
    Ok(())
}

pub async fn update(pool: &SqlitePool, category: &str, budgeted_amount: Decimal) -> Result<(), AppError> {
    let result = sqlx::query("UPDATE budget SET budgeted_amount = ?1 WHERE category = ?2")
        .bind(budgeted_amount.to_string())
        .bind(category)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::not_found("Budget"));
    }
    Ok(())
}

pub async fn delete(pool: &SqlitePool, category: &str) -> Result<(), AppError> {
    let result = sqlx::query("DELETE FROM budget WHERE category = ?1")
        .bind(category)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::not_found("Budget"));
    }
    tracing::info!(category, "Deleted budget");
    Ok(())
}

/// Every budgeted category with what was spent against it in `month` ("YYYY-MM").
pub async fn report(pool: &SqlitePool, month: &str) -> Result<Vec<BudgetLine>, AppError> {
    let budgets = list(pool).await?;

    let spending = sqlx::query_as::<_, (String, String)>(
        "SELECT category, amount FROM expenses WHERE strftime('%Y-%m', date) = ?1",
    )
    .bind(month)
    .fetch_all(pool)
    .await?;

    let mut spent: HashMap<String, Decimal> = HashMap::new();
    for (category, raw) in spending {
        let total = spent.entry(category).or_insert(Decimal::ZERO);
        *total = money::add(*total, parse_amount(&raw)?)?;
    }

    budgets
        .into_iter()
        .map(|budget| {
            let actual = spent.get(&budget.category).copied().unwrap_or(Decimal::ZERO);
            BudgetLine::new(budget, actual)
        })
        .collect()
}
