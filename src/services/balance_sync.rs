//! Keeps loan/lease remaining balances in step with the expenses paid against them.
//!
//! An expense pays down a loan/lease only while it is linked to one and its
//! category is "Loan" or "Lease". Every expense write computes the balance
//! effects of moving from its old state to its new one and applies them on the
//! same connection, inside the caller's transaction.

use rust_decimal::Decimal;
use sqlx::SqliteConnection;

use crate::database::parse_amount;
use crate::error::AppError;
use crate::models::expense::is_loan_payment_category;
use crate::models::LoanLeaseId;
use crate::utils::money;

/// The part of an expense that pays down a loan/lease.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoanPayment {
    pub loan_lease_id: LoanLeaseId,
    pub amount: Decimal,
}

impl LoanPayment {
    pub fn from_expense(
        category: &str,
        loan_lease_id: Option<LoanLeaseId>,
        amount: Decimal,
    ) -> Option<Self> {
        let loan_lease_id = loan_lease_id?;
        is_loan_payment_category(category).then_some(Self {
            loan_lease_id,
            amount,
        })
    }
}

/// Signed change to one loan/lease's remaining balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BalanceEffect {
    pub loan_lease_id: LoanLeaseId,
    pub delta: Decimal,
}

/// Effects of an expense moving from `before` to `after`.
///
/// Create is `(None, Some)`, delete is `(Some, None)`, update is both. The old
/// payment is reversed and the new one applied. Effects on the same loan/lease
/// are merged, and a net zero change yields no effect.
pub fn balance_effects(before: Option<LoanPayment>, after: Option<LoanPayment>) -> Vec<BalanceEffect> {
    let reversal = before.map(|p| BalanceEffect {
        loan_lease_id: p.loan_lease_id,
        delta: p.amount,
    });
    let payment = after.map(|p| BalanceEffect {
        loan_lease_id: p.loan_lease_id,
        delta: -p.amount,
    });

    let mut effects: Vec<BalanceEffect> = Vec::with_capacity(2);
    for effect in reversal.into_iter().chain(payment) {
        match effects
            .iter_mut()
            .find(|e| e.loan_lease_id == effect.loan_lease_id)
        {
            Some(existing) => existing.delta += effect.delta,
            None => effects.push(effect),
        }
    }
    effects.retain(|e| !e.delta.is_zero());
    effects
}

/// Apply effects with a read-modify-write per loan/lease. Run this on a
/// transaction's connection so the expense write and the balances commit together.
pub async fn apply(conn: &mut SqliteConnection, effects: &[BalanceEffect]) -> Result<(), AppError> {
    for effect in effects {
        let raw = sqlx::query_scalar::<_, String>(
            "SELECT remaining_balance FROM loans_leases WHERE id = ?1",
        )
        .bind(effect.loan_lease_id)
        .fetch_optional(&mut *conn)
        .await?
        .ok_or_else(|| AppError::not_found("Loan/Lease"))?;

        let before = parse_amount(&raw)?;
        let after = money::add(before, effect.delta)?;

        sqlx::query("UPDATE loans_leases SET remaining_balance = ?1 WHERE id = ?2")
            .bind(after.to_string())
            .bind(effect.loan_lease_id)
            .execute(&mut *conn)
            .await?;

        tracing::info!(
            loan_lease_id = effect.loan_lease_id,
            %before,
            %after,
            "Adjusted loan/lease remaining balance"
        );
    }
    Ok(())
}
