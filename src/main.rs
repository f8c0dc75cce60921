use std::sync::Arc;

use clap::Parser;
use tokio::signal;
use tracing::{error, info};

use finance_tracker_api::{app, database, AppState, Config};

#[derive(Debug, Parser)]
#[command(name = "finance-tracker-api", about = "Personal finance tracker HTTP service")]
struct Args {
    /// Port to listen on. Overrides PORT.
    #[arg(long)]
    port: Option<u16>,

    /// SQLite connection string. Overrides DATABASE_URL.
    #[arg(long)]
    database_url: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "finance_tracker_api=debug,tower_http=debug".into()),
        )
        .init();

    let args = Args::parse();
    info!("Starting Finance Tracker API server...");

    let config = Arc::new(Config::from_env()?.with_overrides(args.port, args.database_url));
    info!("Configuration loaded");

    let db_pool = database::new_pool(&config.database_url, config.max_connections).await?;
    info!("Database connection pool created");

    let app = app(AppState {
        db_pool: db_pool.clone(),
        config: config.clone(),
    });

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);

    tokio::select! {
        result = axum::serve(listener, app) => {
            if let Err(e) = result {
                error!("Server error: {}", e);
            }
        }
        _ = shutdown_signal() => {
            info!("Shutting down gracefully...");
        }
    }

    db_pool.close().await;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
