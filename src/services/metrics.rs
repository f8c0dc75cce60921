//! Aggregation and derived metrics: totals, trends, net worth, loan/lease progress
//! and the dashboard that combines them.
//!
//! Amounts are stored as decimal text, so sums are taken in Rust rather than with
//! SQL `SUM`, which would go through floating point.

use std::collections::{BTreeMap, HashMap};

use rust_decimal::Decimal;
use sqlx::SqlitePool;

use super::{assets_liabilities, loans_leases};
use crate::database::{parse_amount, sum_amounts};
use crate::error::AppError;
use crate::models::{
    CategoryTotal, DashboardSummary, LoanLease, LoanLeaseId, LoanLeaseProgress, NetWorthBreakdown,
    TrendPoint,
};
use crate::utils::date::DateRange;
use crate::utils::money;

async fn sum_in_range(pool: &SqlitePool, sql: &str, range: &DateRange) -> Result<Decimal, AppError> {
    let raws = sqlx::query_scalar::<_, String>(sql)
        .bind(range.start_date)
        .bind(range.end_date)
        .fetch_all(pool)
        .await?;
    sum_amounts(raws)
}

async fn sum_by_month(
    pool: &SqlitePool,
    sql: &str,
    range: &DateRange,
) -> Result<BTreeMap<String, Decimal>, AppError> {
    let rows = sqlx::query_as::<_, (String, String)>(sql)
        .bind(range.start_date)
        .bind(range.end_date)
        .fetch_all(pool)
        .await?;

    let mut by_month = BTreeMap::new();
    for (month, raw) in rows {
        let total = by_month.entry(month).or_insert(Decimal::ZERO);
        *total = money::add(*total, parse_amount(&raw)?)?;
    }
    Ok(by_month)
}

pub async fn total_income(pool: &SqlitePool, range: &DateRange) -> Result<Decimal, AppError> {
    sum_in_range(pool, "SELECT amount FROM income WHERE date BETWEEN ?1 AND ?2", range).await
}

pub async fn total_expenses(pool: &SqlitePool, range: &DateRange) -> Result<Decimal, AppError> {
    sum_in_range(pool, "SELECT amount FROM expenses WHERE date BETWEEN ?1 AND ?2", range).await
}

pub async fn total_savings_contributions(
    pool: &SqlitePool,
    range: &DateRange,
) -> Result<Decimal, AppError> {
    sum_in_range(
        pool,
        "SELECT contribution FROM savings WHERE date BETWEEN ?1 AND ?2",
        range,
    )
    .await
}

/// Spending per category, ordered by category name.
pub async fn expense_categories(
    pool: &SqlitePool,
    range: &DateRange,
) -> Result<Vec<CategoryTotal>, AppError> {
    let rows = sqlx::query_as::<_, (String, String)>(
        "SELECT category, amount FROM expenses WHERE date BETWEEN ?1 AND ?2",
    )
    .bind(range.start_date)
    .bind(range.end_date)
    .fetch_all(pool)
    .await?;

    let mut by_category: BTreeMap<String, Decimal> = BTreeMap::new();
    for (category, raw) in rows {
        let total = by_category.entry(category).or_insert(Decimal::ZERO);
        *total = money::add(*total, parse_amount(&raw)?)?;
    }
    Ok(by_category
        .into_iter()
        .map(|(category, amount)| CategoryTotal { category, amount })
        .collect())
}

pub async fn income_by_month(
    pool: &SqlitePool,
    range: &DateRange,
) -> Result<BTreeMap<String, Decimal>, AppError> {
    sum_by_month(
        pool,
        "SELECT strftime('%Y-%m', date) AS month, amount FROM income WHERE date BETWEEN ?1 AND ?2",
        range,
    )
    .await
}

pub async fn expenses_by_month(
    pool: &SqlitePool,
    range: &DateRange,
) -> Result<BTreeMap<String, Decimal>, AppError> {
    sum_by_month(
        pool,
        "SELECT strftime('%Y-%m', date) AS month, amount FROM expenses WHERE date BETWEEN ?1 AND ?2",
        range,
    )
    .await
}

/// One point per month in `months`, zero where nothing was recorded.
pub fn fill_trend(months: &[String], by_month: &BTreeMap<String, Decimal>) -> Vec<TrendPoint> {
    months
        .iter()
        .map(|month| TrendPoint {
            month: month.clone(),
            value: by_month.get(month).copied().unwrap_or(Decimal::ZERO),
        })
        .collect()
}

pub async fn income_trend(pool: &SqlitePool, range: &DateRange) -> Result<Vec<TrendPoint>, AppError> {
    let by_month = income_by_month(pool, range).await?;
    Ok(fill_trend(&range.months(), &by_month))
}

pub async fn expense_trend(pool: &SqlitePool, range: &DateRange) -> Result<Vec<TrendPoint>, AppError> {
    let by_month = expenses_by_month(pool, range).await?;
    Ok(fill_trend(&range.months(), &by_month))
}

pub async fn outstanding_loans_leases(pool: &SqlitePool) -> Result<Decimal, AppError> {
    let raws = sqlx::query_scalar::<_, String>("SELECT remaining_balance FROM loans_leases")
        .fetch_all(pool)
        .await?;
    sum_amounts(raws)
}

/// Latest snapshot's assets minus its liabilities minus outstanding loan/lease
/// balances. Everything is zero when no snapshot has been recorded.
pub async fn net_worth_breakdown(pool: &SqlitePool) -> Result<NetWorthBreakdown, AppError> {
    let Some(snapshot) = assets_liabilities::latest(pool).await? else {
        return Ok(NetWorthBreakdown::empty());
    };
    let outstanding = outstanding_loans_leases(pool).await?;
    let total_assets = snapshot.total_assets()?;
    let total_liabilities = snapshot.total_liabilities()?;
    let net_worth = money::sub(money::sub(total_assets, total_liabilities)?, outstanding)?;

    Ok(NetWorthBreakdown {
        as_of: Some(snapshot.date),
        total_assets,
        total_liabilities,
        outstanding_loans_leases: outstanding,
        net_worth,
    })
}

pub async fn net_worth(pool: &SqlitePool) -> Result<Decimal, AppError> {
    Ok(net_worth_breakdown(pool).await?.net_worth)
}

/// Percentage of principal repaid, to two decimal places, within [0, 100].
pub fn progress_percent(total_amount: Decimal, remaining_balance: Decimal) -> Result<Decimal, AppError> {
    if total_amount <= Decimal::ZERO {
        return Ok(Decimal::ZERO);
    }
    let repaid = money::sub(total_amount, remaining_balance)?;
    Ok(money::percent(repaid, total_amount)?.clamp(Decimal::ZERO, Decimal::ONE_HUNDRED))
}

pub fn net_flow(total_income: Decimal, total_expenses: Decimal) -> Result<Decimal, AppError> {
    money::sub(total_income, total_expenses)
}

/// Net flow as a percentage of income, to two decimal places. Zero without income.
pub fn savings_rate(total_income: Decimal, total_expenses: Decimal) -> Result<Decimal, AppError> {
    if total_income.is_zero() {
        return Ok(Decimal::ZERO);
    }
    money::percent(net_flow(total_income, total_expenses)?, total_income)
}

fn progress_for(
    loan: LoanLease,
    paid: &HashMap<LoanLeaseId, Decimal>,
) -> Result<LoanLeaseProgress, AppError> {
    Ok(LoanLeaseProgress {
        progress: progress_percent(loan.total_amount, loan.remaining_balance)?,
        paid_amount: paid.get(&loan.id).copied().unwrap_or(Decimal::ZERO),
        id: loan.id,
        name: loan.name,
        r#type: loan.r#type,
        total_amount: loan.total_amount,
        monthly_installment: loan.monthly_installment,
        remaining_balance: loan.remaining_balance,
    })
}

/// Progress of every loan/lease. `paid_amount` only counts linked expenses dated
/// inside `range`; `progress` reflects the current remaining balance.
pub async fn loan_lease_progress(
    pool: &SqlitePool,
    range: &DateRange,
) -> Result<Vec<LoanLeaseProgress>, AppError> {
    let loans = loans_leases::list(pool).await?;

    let linked = sqlx::query_as::<_, (LoanLeaseId, String)>(
        r#"
        SELECT loan_lease_id, amount FROM expenses
        WHERE loan_lease_id IS NOT NULL AND date BETWEEN ?1 AND ?2
        "#,
    )
    .bind(range.start_date)
    .bind(range.end_date)
    .fetch_all(pool)
    .await?;

    let mut paid: HashMap<LoanLeaseId, Decimal> = HashMap::new();
    for (loan_lease_id, raw) in linked {
        let total = paid.entry(loan_lease_id).or_insert(Decimal::ZERO);
        *total = money::add(*total, parse_amount(&raw)?)?;
    }

    loans.into_iter().map(|loan| progress_for(loan, &paid)).collect()
}

pub async fn dashboard(pool: &SqlitePool, range: DateRange) -> Result<DashboardSummary, AppError> {
    let total_income = total_income(pool, &range).await?;
    let total_expenses = total_expenses(pool, &range).await?;
    let total_savings = total_savings_contributions(pool, &range).await?;
    let categories = expense_categories(pool, &range).await?;
    let net_worth_breakdown = net_worth_breakdown(pool).await?;
    let income_trend = income_trend(pool, &range).await?;
    let expense_trend = expense_trend(pool, &range).await?;
    let loan_lease_progress = loan_lease_progress(pool, &range).await?;

    Ok(DashboardSummary {
        range,
        total_income,
        total_expenses,
        total_savings,
        net_flow: net_flow(total_income, total_expenses)?,
        savings_rate: savings_rate(total_income, total_expenses)?,
        net_worth: net_worth_breakdown.net_worth,
        net_worth_breakdown,
        categories,
        income_trend,
        expense_trend,
        loan_lease_progress,
    })
}
