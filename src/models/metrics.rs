//! Aggregates computed by the metrics service.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::ids::LoanLeaseId;
use crate::utils::date::DateRange;

/// Spending in one expense category over a date range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryTotal {
    pub category: String,
    pub amount: Decimal,
}

/// One month of a trend series. `month` is "YYYY-MM".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub month: String,
    pub value: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetWorthBreakdown {
    /// Date of the snapshot used, if any exists.
    #[serde(default, with = "crate::utils::date::opt")]
    pub as_of: Option<NaiveDate>,
    pub total_assets: Decimal,
    pub total_liabilities: Decimal,
    pub outstanding_loans_leases: Decimal,
    pub net_worth: Decimal,
}

impl NetWorthBreakdown {
    pub fn empty() -> Self {
        Self {
            as_of: None,
            total_assets: Decimal::ZERO,
            total_liabilities: Decimal::ZERO,
            outstanding_loans_leases: Decimal::ZERO,
            net_worth: Decimal::ZERO,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanLeaseProgress {
    pub id: LoanLeaseId,
    pub name: String,
    pub r#type: String,
    pub total_amount: Decimal,
    pub monthly_installment: Decimal,
    pub remaining_balance: Decimal,
    /// Linked expenses dated within the requested range.
    pub paid_amount: Decimal,
    /// Share of the principal repaid, 0 to 100, from `remaining_balance`.
    pub progress: Decimal,
}

/// Everything the dashboard shows for one date range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    #[serde(flatten)]
    pub range: DateRange,
    pub total_income: Decimal,
    pub total_expenses: Decimal,
    pub total_savings: Decimal,
    pub net_flow: Decimal,
    pub savings_rate: Decimal,
    pub net_worth: Decimal,
    pub net_worth_breakdown: NetWorthBreakdown,
    pub categories: Vec<CategoryTotal>,
    pub income_trend: Vec<TrendPoint>,
    pub expense_trend: Vec<TrendPoint>,
    pub loan_lease_progress: Vec<LoanLeaseProgress>,
}
