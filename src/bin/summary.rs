//! Print the dashboard metrics for a date range as JSON.
//!
//! ```text
//! summary --start 2024-01-01 --end 2024-03-31
//! ```

use anyhow::Context;
use clap::Parser;

use finance_tracker_api::services::metrics;
use finance_tracker_api::utils::date::{self, DateRange};
use finance_tracker_api::{database, Config};

#[derive(Debug, Parser)]
#[command(name = "summary", about = "Print dashboard metrics as JSON")]
struct Args {
    /// First day, YYYY-MM-DD. Both bounds are needed to override the default window.
    #[arg(long)]
    start: Option<String>,

    /// Last day, YYYY-MM-DD.
    #[arg(long)]
    end: Option<String>,

    /// SQLite connection string. Overrides DATABASE_URL.
    #[arg(long)]
    database_url: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "finance_tracker_api=warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = Config::from_env()?.with_overrides(None, args.database_url);

    let range = DateRange::resolve(
        args.start.as_deref(),
        args.end.as_deref(),
        date::today(),
        config.default_range_months,
    )?;

    let pool = database::new_pool(&config.database_url, config.max_connections)
        .await
        .with_context(|| format!("opening {}", config.database_url))?;

    let summary = metrics::dashboard(&pool, range).await?;
    println!("{}", serde_json::to_string_pretty(&summary)?);

    pool.close().await;
    Ok(())
}
