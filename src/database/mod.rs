use std::str::FromStr;

use rust_decimal::Decimal;
use sqlx::migrate::Migrator;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions, SqliteRow};
use sqlx::Row;

use crate::error::AppError;
use crate::utils::money;

pub type DatabasePool = SqlitePool;

pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

pub async fn create_pool(database_url: &str, max_connections: u32) -> anyhow::Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    // An in-memory database lives and dies with its connection.
    let in_memory = database_url.contains(":memory:");
    let pool = if in_memory {
        SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?
    } else {
        SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await?
    };

    if in_memory {
        tracing::warn!("Using an in-memory database, nothing will be persisted");
    }

    Ok(pool)
}

/// Open the pool and bring the schema up to date.
pub async fn new_pool(database_url: &str, max_connections: u32) -> anyhow::Result<DatabasePool> {
    let pool = create_pool(database_url, max_connections).await?;
    MIGRATOR.run(&pool).await?;
    tracing::info!("Database migrations applied");
    Ok(pool)
}

/// Read a money column stored as decimal text. Unparseable text is reported as
/// `CorruptValue` once the error reaches `AppError`.
pub fn decimal_column(row: &SqliteRow, column: &str) -> Result<Decimal, sqlx::Error> {
    let raw: String = row.try_get(column)?;
    parse_amount(&raw).map_err(|e| sqlx::Error::ColumnDecode {
        index: column.to_string(),
        source: Box::new(e),
    })
}

/// Parse a single stored amount fetched as a scalar.
pub fn parse_amount(raw: &str) -> Result<Decimal, AppError> {
    Decimal::from_str(raw.trim()).map_err(|_| AppError::CorruptValue(raw.to_string()))
}

/// Sum stored amounts exactly.
pub fn sum_amounts<I, S>(raws: I) -> Result<Decimal, AppError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    raws.into_iter()
        .try_fold(Decimal::ZERO, |acc, raw| money::add(acc, parse_amount(raw.as_ref())?))
}
