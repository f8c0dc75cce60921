//! Records as stored, the form payloads that create or change them, and the
//! aggregates computed over them.

pub mod assets_liabilities;
pub mod budget;
pub mod expense;
pub mod ids;
pub mod income;
pub mod loan_lease;
pub mod metrics;
pub mod savings;

pub use assets_liabilities::{AssetsLiabilities, AssetsLiabilitiesForm, SnapshotRow};
pub use budget::{Budget, BudgetForm, BudgetLine};
pub use expense::{Expense, ExpenseForm};
pub use ids::{ExpenseId, IncomeId, LoanLeaseId, SavingsId, SnapshotId};
pub use income::{Income, IncomeForm};
pub use loan_lease::{LoanLease, LoanLeaseForm};
pub use metrics::{CategoryTotal, DashboardSummary, LoanLeaseProgress, NetWorthBreakdown, TrendPoint};
pub use savings::{Savings, SavingsForm};
