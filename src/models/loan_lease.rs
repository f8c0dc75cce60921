use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row};

use super::ids::LoanLeaseId;
use crate::database::decimal_column;

/// A loan or lease obligation. `remaining_balance` moves with the expenses paid against it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanLease {
    pub id: LoanLeaseId,
    pub name: String,
    pub r#type: String,
    pub total_amount: Decimal,
    pub monthly_installment: Decimal,
    pub remaining_balance: Decimal,
    #[serde(default, with = "crate::utils::date::opt")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, with = "crate::utils::date::opt")]
    pub end_date: Option<NaiveDate>,
    pub notes: Option<String>,
}

impl<'r> FromRow<'r, SqliteRow> for LoanLease {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            r#type: row.try_get("type")?,
            total_amount: decimal_column(row, "total_amount")?,
            monthly_installment: decimal_column(row, "monthly_installment")?,
            remaining_balance: decimal_column(row, "remaining_balance")?,
            start_date: row.try_get("start_date")?,
            end_date: row.try_get("end_date")?,
            notes: row.try_get("notes")?,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanLeaseForm {
    pub name: String,
    pub r#type: String,
    pub total_amount: Decimal,
    pub monthly_installment: Decimal,
    pub remaining_balance: Decimal,
    #[serde(default, with = "crate::utils::date::opt")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, with = "crate::utils::date::opt")]
    pub end_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "crate::utils::form::empty_string_as_none")]
    pub notes: Option<String>,
}
