use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row};

use super::ids::SnapshotId;
use crate::database::decimal_column;
use crate::error::AppError;
use crate::utils::money;

/// A dated balance-sheet snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetsLiabilities {
    pub id: SnapshotId,
    #[serde(with = "crate::utils::date")]
    pub date: NaiveDate,
    pub cash_bank: Decimal,
    pub investments: Decimal,
    pub property: Decimal,
    pub vehicles: Decimal,
    pub other_valuables: Decimal,
    pub credit_card_debt: Decimal,
    pub loans: Decimal,
    pub mortgage: Decimal,
    pub other_debts: Decimal,
}

impl AssetsLiabilities {
    pub fn total_assets(&self) -> Result<Decimal, AppError> {
        money::sum([
            self.cash_bank,
            self.investments,
            self.property,
            self.vehicles,
            self.other_valuables,
        ])
    }

    /// Liabilities counted against net worth. The `loans` column is informational:
    /// loan principal is tracked by the loans/leases ledger and subtracted from there.
    pub fn total_liabilities(&self) -> Result<Decimal, AppError> {
        money::sum([self.credit_card_debt, self.mortgage, self.other_debts])
    }
}

impl<'r> FromRow<'r, SqliteRow> for AssetsLiabilities {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            date: row.try_get("date")?,
            cash_bank: decimal_column(row, "cash_bank")?,
            investments: decimal_column(row, "investments")?,
            property: decimal_column(row, "property")?,
            vehicles: decimal_column(row, "vehicles")?,
            other_valuables: decimal_column(row, "other_valuables")?,
            credit_card_debt: decimal_column(row, "credit_card_debt")?,
            loans: decimal_column(row, "loans")?,
            mortgage: decimal_column(row, "mortgage")?,
            other_debts: decimal_column(row, "other_debts")?,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetsLiabilitiesForm {
    #[serde(with = "crate::utils::date")]
    pub date: NaiveDate,
    pub cash_bank: Decimal,
    pub investments: Decimal,
    pub property: Decimal,
    pub vehicles: Decimal,
    pub other_valuables: Decimal,
    pub credit_card_debt: Decimal,
    pub loans: Decimal,
    pub mortgage: Decimal,
    pub other_debts: Decimal,
}

/// Row shape for the snapshot list: the stored fields plus both sides' totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotRow {
    #[serde(flatten)]
    pub snapshot: AssetsLiabilities,
    pub total_assets: Decimal,
    pub total_liabilities: Decimal,
}

impl TryFrom<AssetsLiabilities> for SnapshotRow {
    type Error = AppError;

    fn try_from(snapshot: AssetsLiabilities) -> Result<Self, Self::Error> {
        Ok(Self {
            total_assets: snapshot.total_assets()?,
            total_liabilities: snapshot.total_liabilities()?,
            snapshot,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot() -> AssetsLiabilities {
        AssetsLiabilities {
            id: 1,
            date: NaiveDate::from_ymd_opt(2024, 6, 30).unwrap(),
            cash_bank: Decimal::from(1000),
            investments: Decimal::from(2000),
            property: Decimal::from(300_000),
            vehicles: Decimal::from(15_000),
            other_valuables: Decimal::from(500),
            credit_card_debt: Decimal::from(1200),
            loans: Decimal::from(9000),
            mortgage: Decimal::from(200_000),
            other_debts: Decimal::from(300),
        }
    }

    #[test]
    fn totals_split_assets_from_liabilities() {
        let snapshot = snapshot();
        assert_eq!(snapshot.total_assets().unwrap(), Decimal::from(318_500));
        assert_eq!(snapshot.total_liabilities().unwrap(), Decimal::from(201_500));
    }

    #[test]
    fn oversized_assets_fail_instead_of_panicking() {
        let mut snapshot = snapshot();
        snapshot.cash_bank = Decimal::MAX;
        assert!(matches!(snapshot.total_assets(), Err(AppError::AmountOverflow)));
        assert!(SnapshotRow::try_from(snapshot).is_err());
    }
}
