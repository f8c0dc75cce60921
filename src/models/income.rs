use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row};

use super::ids::IncomeId;
use crate::database::decimal_column;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Income {
    pub id: IncomeId,
    #[serde(with = "crate::utils::date")]
    pub date: NaiveDate,
    pub source: String,
    pub amount: Decimal,
    pub r#type: Option<String>,
    pub notes: Option<String>,
}

impl<'r> FromRow<'r, SqliteRow> for Income {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            date: row.try_get("date")?,
            source: row.try_get("source")?,
            amount: decimal_column(row, "amount")?,
            r#type: row.try_get("type")?,
            notes: row.try_get("notes")?,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IncomeForm {
    #[serde(with = "crate::utils::date")]
    pub date: NaiveDate,
    pub source: String,
    pub amount: Decimal,
    #[serde(default, deserialize_with = "crate::utils::form::empty_string_as_none")]
    pub r#type: Option<String>,
    #[serde(default, deserialize_with = "crate::utils::form::empty_string_as_none")]
    pub notes: Option<String>,
}
