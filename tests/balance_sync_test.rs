// Loan/lease remaining balances follow the expenses linked to them.

use finance_tracker_api::error::AppError;
use finance_tracker_api::services::{expenses, loans_leases, metrics};
use finance_tracker_api::utils::date::DateRange;

use test_helpers::*;

#[tokio::test]
async fn test_loan_payment_reduces_balance_and_updates_progress() {
    let pool = setup_test_db().await;
    let loan_id = create_test_loan(&pool, "Car loan", "1000", "1000").await;

    create_test_expense(&pool, "2024-02-10", "Loan", "200", Some(loan_id)).await;

    assert_eq!(remaining_balance(&pool, loan_id).await, dec("800"));

    let range = DateRange::new(day("2024-01-01"), day("2024-03-31")).unwrap();
    let progress = metrics::loan_lease_progress(&pool, &range).await.unwrap();
    assert_eq!(progress.len(), 1);
    assert_eq!(progress[0].progress, dec("20"));
    assert_eq!(progress[0].paid_amount, dec("200"));
}

#[tokio::test]
async fn test_insert_then_delete_restores_balance() {
    let pool = setup_test_db().await;
    let loan_id = create_test_loan(&pool, "Car loan", "1000", "640.50").await;

    let expense_id = create_test_expense(&pool, "2024-02-10", "Lease", "120.25", Some(loan_id)).await;
    assert_eq!(remaining_balance(&pool, loan_id).await, dec("520.25"));

    expenses::delete(&pool, expense_id).await.unwrap();
    assert_eq!(remaining_balance(&pool, loan_id).await, dec("640.50"));
}

#[tokio::test]
async fn test_unlinked_or_other_category_leaves_balance_alone() {
    let pool = setup_test_db().await;
    let loan_id = create_test_loan(&pool, "Car loan", "1000", "1000").await;

    create_test_expense(&pool, "2024-02-10", "Loan", "200", None).await;
    create_test_expense(&pool, "2024-02-11", "Food", "50", Some(loan_id)).await;

    assert_eq!(remaining_balance(&pool, loan_id).await, dec("1000"));
}

#[tokio::test]
async fn test_update_amount_applies_the_difference() {
    let pool = setup_test_db().await;
    let loan_id = create_test_loan(&pool, "Car loan", "1000", "1000").await;
    let expense_id = create_test_expense(&pool, "2024-02-10", "Loan", "200", Some(loan_id)).await;

    let form = expense_form("2024-02-10", "Loan", "250", Some(loan_id));
    expenses::update(&pool, expense_id, &form).await.unwrap();

    assert_eq!(remaining_balance(&pool, loan_id).await, dec("750"));
}

#[tokio::test]
async fn test_recategorising_away_from_loan_restores_balance() {
    let pool = setup_test_db().await;
    let loan_id = create_test_loan(&pool, "Car loan", "1000", "1000").await;
    let expense_id = create_test_expense(&pool, "2024-02-10", "Loan", "200", Some(loan_id)).await;
    assert_eq!(remaining_balance(&pool, loan_id).await, dec("800"));

    let form = expense_form("2024-02-10", "Food", "200", Some(loan_id));
    expenses::update(&pool, expense_id, &form).await.unwrap();

    assert_eq!(remaining_balance(&pool, loan_id).await, dec("1000"));
}

#[tokio::test]
async fn test_relinking_moves_the_payment_between_loans() {
    let pool = setup_test_db().await;
    let car = create_test_loan(&pool, "Car loan", "1000", "1000").await;
    let lease = create_test_loan(&pool, "Laptop lease", "600", "600").await;
    let expense_id = create_test_expense(&pool, "2024-02-10", "Loan", "100", Some(car)).await;

    let form = expense_form("2024-02-10", "Lease", "100", Some(lease));
    expenses::update(&pool, expense_id, &form).await.unwrap();

    assert_eq!(remaining_balance(&pool, car).await, dec("1000"));
    assert_eq!(remaining_balance(&pool, lease).await, dec("500"));

    let expense = expenses::get(&pool, expense_id).await.unwrap().unwrap();
    assert_eq!(expense.loan_lease_name.as_deref(), Some("Laptop lease"));
}

#[tokio::test]
async fn test_failed_update_leaves_balance_and_expense_untouched() {
    let pool = setup_test_db().await;
    let loan_id = create_test_loan(&pool, "Car loan", "1000", "1000").await;
    let expense_id = create_test_expense(&pool, "2024-02-10", "Loan", "200", Some(loan_id)).await;

    // No loan/lease 999: the write is rejected and rolled back.
    let form = expense_form("2024-02-10", "Loan", "300", Some(999));
    assert!(expenses::update(&pool, expense_id, &form).await.is_err());

    assert_eq!(remaining_balance(&pool, loan_id).await, dec("800"));
    let expense = expenses::get(&pool, expense_id).await.unwrap().unwrap();
    assert_eq!(expense.amount, dec("200"));
    assert_eq!(expense.loan_lease_id, Some(loan_id));
}

#[tokio::test]
async fn test_missing_expense_is_not_found() {
    let pool = setup_test_db().await;

    let err = expenses::delete(&pool, 42).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));

    let form = expense_form("2024-02-10", "Food", "10", None);
    let err = expenses::update(&pool, 42, &form).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
async fn test_deleting_loan_removes_linked_expenses() {
    let pool = setup_test_db().await;
    let car = create_test_loan(&pool, "Car loan", "1000", "1000").await;
    let other = create_test_loan(&pool, "Laptop lease", "600", "600").await;
    create_test_expense(&pool, "2024-02-10", "Loan", "100", Some(car)).await;
    create_test_expense(&pool, "2024-03-10", "Loan", "100", Some(car)).await;
    let kept = create_test_expense(&pool, "2024-03-11", "Lease", "50", Some(other)).await;

    loans_leases::delete(&pool, car).await.unwrap();

    assert!(loans_leases::get(&pool, car).await.unwrap().is_none());
    let remaining = expenses::list(&pool).await.unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, kept);
    assert_eq!(remaining_balance(&pool, other).await, dec("550"));
}

#[tokio::test]
async fn test_deleting_missing_loan_is_not_found() {
    let pool = setup_test_db().await;
    let err = loans_leases::delete(&pool, 7).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
async fn test_balance_overflow_rolls_back_the_expense() {
    let pool = setup_test_db().await;
    let loan_id = create_test_loan(
        &pool,
        "Runaway loan",
        "1000",
        "-70000000000000000000000000000",
    )
    .await;

    let form = expense_form("2024-02-10", "Loan", "70000000000000000000000000000", Some(loan_id));
    let err = expenses::insert(&pool, &form).await.unwrap_err();
    assert!(matches!(err, AppError::AmountOverflow));

    assert!(expenses::list(&pool).await.unwrap().is_empty());
    assert_eq!(
        remaining_balance(&pool, loan_id).await,
        dec("-70000000000000000000000000000")
    );
}
