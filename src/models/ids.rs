//! Type aliases for row ids. All tables use SQLite integer primary keys,
//! except `budget`, which is keyed by its category name.

pub type IncomeId = i64;
pub type ExpenseId = i64;
pub type SavingsId = i64;
pub type SnapshotId = i64;
pub type LoanLeaseId = i64;
