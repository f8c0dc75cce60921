use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row};

use super::ids::SavingsId;
use crate::database::decimal_column;

/// A contribution to a savings or investment account, with the account's value at that date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Savings {
    pub id: SavingsId,
    #[serde(with = "crate::utils::date")]
    pub date: NaiveDate,
    pub account_name: String,
    pub r#type: String,
    pub contribution: Decimal,
    pub current_value: Decimal,
    pub notes: Option<String>,
}

impl<'r> FromRow<'r, SqliteRow> for Savings {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            date: row.try_get("date")?,
            account_name: row.try_get("account_name")?,
            r#type: row.try_get("type")?,
            contribution: decimal_column(row, "contribution")?,
            current_value: decimal_column(row, "current_value")?,
            notes: row.try_get("notes")?,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavingsForm {
    #[serde(with = "crate::utils::date")]
    pub date: NaiveDate,
    pub account_name: String,
    pub r#type: String,
    pub contribution: Decimal,
    pub current_value: Decimal,
    #[serde(default, deserialize_with = "crate::utils::form::empty_string_as_none")]
    pub notes: Option<String>,
}
