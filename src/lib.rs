// Library root, shared by the server binary, the summary binary and the tests.

pub mod config;
pub mod database;
pub mod error;
pub mod handlers;
pub mod models;
pub mod services;
pub mod utils;

pub use config::Config;
pub use error::AppError;

use std::sync::Arc;

use axum::{routing::get, routing::post, Router};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use database::DatabasePool;
use handlers::{assets_liabilities, budget, expenses, income, loans_leases, savings};

#[derive(Clone)]
pub struct AppState {
    pub db_pool: DatabasePool,
    pub config: Arc<Config>,
}

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::dashboard))
        .route("/health", get(health_check))
        .route("/income", get(income::list_income).post(income::create_income))
        .route(
            "/income/edit/:id",
            get(income::edit_income_view).post(income::update_income),
        )
        .route("/income/delete/:id", post(income::delete_income))
        .route(
            "/expenses",
            get(expenses::list_expenses).post(expenses::create_expense),
        )
        .route(
            "/expenses/edit/:id",
            get(expenses::edit_expense_view).post(expenses::update_expense),
        )
        .route("/expenses/delete/:id", post(expenses::delete_expense))
        .route("/savings", get(savings::list_savings).post(savings::create_savings))
        .route(
            "/savings/edit/:id",
            get(savings::edit_savings_view).post(savings::update_savings),
        )
        .route("/savings/delete/:id", post(savings::delete_savings))
        .route("/budget", get(budget::budget_report).post(budget::set_budget))
        .route(
            "/budget/edit/:category",
            get(budget::edit_budget_view).post(budget::update_budget),
        )
        .route("/budget/delete/:category", post(budget::delete_budget))
        .route(
            "/assets-liabilities",
            get(assets_liabilities::list_snapshots).post(assets_liabilities::create_snapshot),
        )
        .route(
            "/assets-liabilities/edit/:id",
            get(assets_liabilities::edit_snapshot_view).post(assets_liabilities::update_snapshot),
        )
        .route(
            "/assets-liabilities/delete/:id",
            post(assets_liabilities::delete_snapshot),
        )
        .route(
            "/loans-leases",
            get(loans_leases::list_loans_leases).post(loans_leases::create_loan_lease),
        )
        .route("/loans-leases/progress", get(handlers::loan_lease_progress))
        .route(
            "/loans-leases/edit/:id",
            get(loans_leases::edit_loan_lease_view).post(loans_leases::update_loan_lease),
        )
        .route("/loans-leases/delete/:id", post(loans_leases::delete_loan_lease))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
