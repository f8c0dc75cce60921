// List order for the dated ledgers: newest date first, then newest row first.

use finance_tracker_api::models::LoanLeaseForm;
use finance_tracker_api::services::{assets_liabilities, expenses, income, loans_leases, savings};

use test_helpers::*;

#[tokio::test]
async fn test_income_list_is_date_then_id_descending() {
    let pool = setup_test_db().await;
    let first = create_test_income(&pool, "2024-02-01", "10").await;
    let older = create_test_income(&pool, "2024-01-15", "20").await;
    let second = create_test_income(&pool, "2024-02-01", "30").await;

    let ids: Vec<i64> = income::list(&pool).await.unwrap().iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![second, first, older]);
}

#[tokio::test]
async fn test_expense_list_is_date_then_id_descending() {
    let pool = setup_test_db().await;
    let first = create_test_expense(&pool, "2024-02-01", "Food", "10", None).await;
    let newer = create_test_expense(&pool, "2024-03-01", "Food", "20", None).await;
    let second = create_test_expense(&pool, "2024-02-01", "Rent", "30", None).await;

    let ids: Vec<i64> = expenses::list(&pool).await.unwrap().iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![newer, second, first]);
}

#[tokio::test]
async fn test_savings_list_is_date_then_id_descending() {
    let pool = setup_test_db().await;
    let first = create_test_savings(&pool, "2024-02-01", "10").await;
    let second = create_test_savings(&pool, "2024-02-01", "20").await;
    let older = create_test_savings(&pool, "2023-12-31", "30").await;

    let ids: Vec<i64> = savings::list(&pool).await.unwrap().iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![second, first, older]);
}

#[tokio::test]
async fn test_snapshot_list_is_date_then_id_descending() {
    let pool = setup_test_db().await;
    let older = create_test_snapshot(&pool, "2024-01-31", "100", "0").await;
    let first = create_test_snapshot(&pool, "2024-02-29", "200", "0").await;
    let second = create_test_snapshot(&pool, "2024-02-29", "300", "0").await;

    let ids: Vec<i64> = assets_liabilities::list(&pool)
        .await
        .unwrap()
        .iter()
        .map(|r| r.id)
        .collect();
    assert_eq!(ids, vec![second, first, older]);
}

#[tokio::test]
async fn test_loans_leases_are_listed_by_name() {
    let pool = setup_test_db().await;
    create_test_loan(&pool, "Mortgage", "200000", "180000").await;
    create_test_loan(&pool, "Car loan", "1000", "1000").await;

    let names: Vec<String> = loans_leases::list(&pool)
        .await
        .unwrap()
        .into_iter()
        .map(|l| l.name)
        .collect();
    assert_eq!(names, vec!["Car loan".to_string(), "Mortgage".to_string()]);
}

#[tokio::test]
async fn test_loan_update_overwrites_every_field() {
    let pool = setup_test_db().await;
    let id = create_test_loan(&pool, "Car loan", "1000", "1000").await;

    let form = LoanLeaseForm {
        name: "Car loan (refinanced)".to_string(),
        r#type: "Loan".to_string(),
        total_amount: dec("1200"),
        monthly_installment: dec("80"),
        remaining_balance: dec("900"),
        start_date: Some(day("2024-03-01")),
        end_date: Some(day("2025-08-01")),
        notes: Some("lower rate".to_string()),
    };
    loans_leases::update(&pool, id, &form).await.unwrap();

    let loan = loans_leases::get(&pool, id).await.unwrap().unwrap();
    assert_eq!(loan.name, "Car loan (refinanced)");
    assert_eq!(loan.total_amount, dec("1200"));
    assert_eq!(loan.remaining_balance, dec("900"));
    assert_eq!(loan.end_date, Some(day("2025-08-01")));
    assert_eq!(loan.notes.as_deref(), Some("lower rate"));
}
