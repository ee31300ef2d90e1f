#![allow(clippy::unwrap_used)]

use super::*;
use crate::models::{Category, MAX_AMOUNT};
use rust_decimal_macros::dec;

fn date(d: u32, m: u32, y: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn txn(d: u32, amount: Decimal, category: Category, desc: &str) -> Transaction {
    Transaction::new(date(d, 3, 2024), amount, category, desc.into())
}

// ── Summary ───────────────────────────────────────────────────

#[test]
fn test_summary_empty() {
    let summary = Summary::from_records(&[]);
    assert!(summary.is_empty());
    assert_eq!(summary.total_income, Decimal::ZERO);
    assert_eq!(summary.total_expenses, Decimal::ZERO);
    assert_eq!(summary.net, Decimal::ZERO);
    assert_eq!(summary, Summary::default());
}

#[test]
fn test_summary_income_and_expense() {
    let records = vec![
        txn(1, dec!(100.00), Category::Income, ""),
        txn(2, dec!(40.00), Category::Expenses, ""),
    ];
    let summary = Summary::from_records(&records);
    assert!(!summary.is_empty());
    assert_eq!(summary.count, 2);
    assert_eq!(summary.total_income, dec!(100.00));
    assert_eq!(summary.total_expenses, dec!(40.00));
    assert_eq!(summary.net, dec!(60.00));
}

#[test]
fn test_summary_negative_net() {
    let records = vec![
        txn(1, dec!(10), Category::Income, ""),
        txn(2, dec!(25.75), Category::Expenses, ""),
        txn(3, dec!(4.25), Category::Expenses, ""),
    ];
    let summary = Summary::from_records(&records);
    assert_eq!(summary.total_expenses, dec!(30.00));
    assert_eq!(summary.net, dec!(-20.00));
}

#[test]
fn test_summary_exact_decimal_sums() {
    let records: Vec<Transaction> = (1..=10)
        .map(|d| txn(d, dec!(0.10), Category::Income, ""))
        .collect();
    assert_eq!(Summary::from_records(&records).total_income, dec!(1.00));
}

// ── render_summary ────────────────────────────────────────────

#[test]
fn test_render_summary_two_decimals() {
    let records = vec![
        txn(1, dec!(100), Category::Income, ""),
        txn(2, dec!(40), Category::Expenses, ""),
    ];
    let text = render_summary(&Summary::from_records(&records));
    assert_eq!(
        text,
        "Summary:\nTotal Income: 100.00\nTotal Expenses: 40.00\nNet Savings: 60.00\n"
    );
}

// ── render_report ─────────────────────────────────────────────

#[test]
fn test_render_report_empty_has_notice_and_zero_totals() {
    let text = render_report(date(1, 3, 2024), date(31, 3, 2024), &[]);
    assert!(text.starts_with(NO_RECORDS_NOTICE));
    assert!(text.contains("Total Income: 0.00"));
    assert!(text.contains("Total Expenses: 0.00"));
    assert!(text.contains("Net Savings: 0.00"));
    assert!(!text.contains("Transactions from"));
}

#[test]
fn test_render_report_lists_records_in_order() {
    let records = vec![
        txn(15, dec!(25.5), Category::Income, "test"),
        txn(3, dec!(9.99), Category::Expenses, "Coffee"),
    ];
    let text = render_report(date(1, 3, 2024), date(31, 3, 2024), &records);
    assert!(text.starts_with("Transactions from 01-03-2024 to 31-03-2024\n"));

    let first = text.find("15-03-2024").unwrap();
    let second = text.find("03-03-2024").unwrap();
    assert!(first < second);

    assert!(text.contains("25.50"));
    assert!(text.contains("9.99"));
    assert!(text.contains("Income"));
    assert!(text.contains("Expenses"));
    assert!(text.contains("test"));
    assert!(text.contains("Coffee"));
    assert!(text.contains("Net Savings: 15.51"));
    assert!(!text.contains(NO_RECORDS_NOTICE));
}

#[test]
fn test_render_report_keeps_full_description() {
    let long = "monthly payment for the shared apartment, utilities and internet".to_string();
    let records = vec![txn(1, dec!(1), Category::Income, &long)];
    let text = render_report(date(1, 3, 2024), date(31, 3, 2024), &records);
    assert!(text.contains(&long));
}

#[test]
fn test_render_report_rounds_amounts() {
    let records = vec![txn(1, dec!(2.675), Category::Expenses, "Tea")];
    let text = render_report(date(1, 3, 2024), date(31, 3, 2024), &records);
    assert!(text.contains("2.68"));
    assert!(text.contains("Total Expenses: 2.68"));
}

#[test]
fn test_render_summary_rounds_half_away_from_zero() {
    let records = vec![txn(1, dec!(10.999), Category::Income, "")];
    let text = render_summary(&Summary::from_records(&records));
    assert!(text.contains("Total Income: 11.00"));
    assert!(text.contains("Net Savings: 11.00"));
}

#[test]
fn test_summary_large_amounts_do_not_overflow() {
    let records = vec![
        txn(1, MAX_AMOUNT, Category::Income, ""),
        txn(2, MAX_AMOUNT, Category::Income, ""),
        txn(3, MAX_AMOUNT, Category::Expenses, ""),
    ];
    let summary = Summary::from_records(&records);
    assert_eq!(summary.total_income, MAX_AMOUNT * Decimal::TWO);
    assert_eq!(summary.net, MAX_AMOUNT);
}
