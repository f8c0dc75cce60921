use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row};

use crate::database::decimal_column;
use crate::error::AppError;
use crate::utils::money;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    pub category: String,
    pub budgeted_amount: Decimal,
}

impl<'r> FromRow<'r, SqliteRow> for Budget {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            category: row.try_get("category")?,
            budgeted_amount: decimal_column(row, "budgeted_amount")?,
        })
    }
}

/// Form body for POST /budget. The edit route takes the category from the path,
/// so it is optional here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetForm {
    #[serde(default, deserialize_with = "crate::utils::form::empty_string_as_none")]
    pub category: Option<String>,
    pub budgeted_amount: Decimal,
}

/// One row of the monthly budget report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetLine {
    pub category: String,
    pub budgeted_amount: Decimal,
    pub actual_spent: Decimal,
    pub remaining: Decimal,
}

impl BudgetLine {
    pub fn new(budget: Budget, actual_spent: Decimal) -> Result<Self, AppError> {
        Ok(Self {
            remaining: money::sub(budget.budgeted_amount, actual_spent)?,
            category: budget.category,
            budgeted_amount: budget.budgeted_amount,
            actual_spent,
        })
    }
}
