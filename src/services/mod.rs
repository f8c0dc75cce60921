pub mod assets_liabilities;
pub mod balance_sync;
pub mod budget;
pub mod expenses;
pub mod income;
pub mod loans_leases;
pub mod metrics;
pub mod savings;
