use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row};

use super::ids::{ExpenseId, LoanLeaseId};
use crate::database::decimal_column;
use crate::services::balance_sync::LoanPayment;

/// Categories whose linked expenses pay down a loan/lease balance. Matched exactly.
pub const LOAN_PAYMENT_CATEGORIES: [&str; 2] = ["Loan", "Lease"];

pub fn is_loan_payment_category(category: &str) -> bool {
    LOAN_PAYMENT_CATEGORIES.contains(&category)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: ExpenseId,
    #[serde(with = "crate::utils::date")]
    pub date: NaiveDate,
    pub description: String,
    pub category: String,
    pub amount: Decimal,
    pub payment_method: Option<String>,
    pub notes: Option<String>,
    pub loan_lease_id: Option<LoanLeaseId>,
    /// Name of the linked loan/lease, joined in for display.
    pub loan_lease_name: Option<String>,
}

impl Expense {
    pub fn loan_payment(&self) -> Option<LoanPayment> {
        LoanPayment::from_expense(&self.category, self.loan_lease_id, self.amount)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Expense {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            date: row.try_get("date")?,
            description: row.try_get("description")?,
            category: row.try_get("category")?,
            amount: decimal_column(row, "amount")?,
            payment_method: row.try_get("payment_method")?,
            notes: row.try_get("notes")?,
            loan_lease_id: row.try_get("loan_lease_id")?,
            loan_lease_name: row.try_get("loan_lease_name")?,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenseForm {
    #[serde(with = "crate::utils::date")]
    pub date: NaiveDate,
    pub description: String,
    pub category: String,
    pub amount: Decimal,
    #[serde(default, deserialize_with = "crate::utils::form::empty_string_as_none")]
    pub payment_method: Option<String>,
    #[serde(default, deserialize_with = "crate::utils::form::empty_string_as_none")]
    pub notes: Option<String>,
    #[serde(default, deserialize_with = "crate::utils::form::empty_string_as_none")]
    pub loan_lease_id: Option<LoanLeaseId>,
}

impl ExpenseForm {
    pub fn loan_payment(&self) -> Option<LoanPayment> {
        LoanPayment::from_expense(&self.category, self.loan_lease_id, self.amount)
    }
}
