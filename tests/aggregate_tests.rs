// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

mod common;

use common::{sample, tx};
use finboard::aggregate::{
    DEFAULT_CATEGORY_COLOR, Report, account_summaries, balance_series, category_totals,
    direct_totals, grand_totals, monthly_totals,
};
use finboard::models::{Totals, TransactionKind};
use rust_decimal::Decimal;

#[test]
fn account_totals_match_direct_sums() {
    let txs = sample();
    let by_account = grand_totals(&account_summaries(&txs));
    let direct = direct_totals(&txs);
    assert_eq!(by_account, direct);
    assert_eq!(direct.income, Decimal::from(7_000_000));
    assert_eq!(direct.expense, Decimal::from(1_550_000));
    assert_eq!(direct.balance, Decimal::from(5_450_000));
}

#[test]
fn account_summaries_keep_first_seen_order() {
    let accounts = account_summaries(&sample());
    let names: Vec<&str> = accounts.iter().map(|a| a.account.as_str()).collect();
    assert_eq!(names, ["Cuenta Corriente", "Efectivo", "Tarjeta de Crédito"]);
    let card = &accounts[2];
    assert_eq!(card.income, Decimal::ZERO);
    assert_eq!(card.balance, Decimal::from(-150_000));
}

#[test]
fn category_totals_ignore_income() {
    let txs = sample();
    let cats = category_totals(&txs);
    assert!(cats.iter().all(|c| c.category != "Salario"));

    let expense_sum: Decimal = txs
        .iter()
        .filter(|t| t.kind == TransactionKind::Expense)
        .map(|t| t.amount)
        .sum();
    let cat_sum: Decimal = cats.iter().map(|c| c.amount).sum();
    assert_eq!(cat_sum, expense_sum);

    let food = cats.iter().find(|c| c.category == "Alimentación").unwrap();
    assert_eq!(food.amount, Decimal::from(1_000_000));
    assert_eq!(food.color, "#E76161");
    let pets = cats.iter().find(|c| c.category == "Mascotas").unwrap();
    assert_eq!(pets.color, DEFAULT_CATEGORY_COLOR);
}

#[test]
fn balance_series_is_a_running_sum_in_date_order() {
    let txs = sample();
    let points = balance_series(&txs);
    assert_eq!(points.len(), txs.len());

    let mut sorted = txs.clone();
    sorted.sort_by_key(|t| t.date);
    assert_eq!(points[0].balance, sorted[0].signed_amount());
    for i in 1..points.len() {
        assert_eq!(
            points[i].balance,
            points[i - 1].balance + sorted[i].signed_amount()
        );
        assert!(points[i - 1].date <= points[i].date);
    }
    assert_eq!(points.last().unwrap().balance, Decimal::from(5_450_000));
    assert_eq!(points[0].label, "1 may");
}

#[test]
fn same_day_transactions_keep_input_order() {
    use TransactionKind::{Expense, Income};
    let txs = vec![
        tx("b", Expense, "Otros", "Efectivo", "2025-01-02", 50),
        tx("a", Income, "Otros", "Efectivo", "2025-01-02", 100),
    ];
    let points = balance_series(&txs);
    assert_eq!(points[0].balance, Decimal::from(-50));
    assert_eq!(points[1].balance, Decimal::from(50));
}

#[test]
fn monthly_buckets_split_years_and_keep_zero_sides() {
    use TransactionKind::{Expense, Income};
    let txs = vec![
        tx("1", Income, "Salario", "A", "2024-06-05", 100),
        tx("2", Expense, "Otros", "A", "2025-06-07", 40),
        tx("3", Expense, "Otros", "A", "2025-06-09", 10),
    ];
    let months = monthly_totals(&txs);
    assert_eq!(months.len(), 2);
    assert_eq!((months[0].year, months[0].month), (2024, 6));
    assert_eq!(months[0].label, "jun");
    assert_eq!(months[0].expense, Decimal::ZERO);
    assert_eq!(months[1].year, 2025);
    assert_eq!(months[1].income, Decimal::ZERO);
    assert_eq!(months[1].expense, Decimal::from(50));
}

#[test]
fn empty_snapshot_gives_empty_report() {
    let report = Report::from_snapshot(&[]);
    assert_eq!(report.transactions, 0);
    assert!(report.categories.is_empty());
    assert!(report.monthly.is_empty());
    assert!(report.balance.is_empty());
    assert!(report.accounts.is_empty());
    assert_eq!(report.totals, Totals::default());
}

#[test]
fn report_projections_come_from_one_snapshot() {
    let txs = sample();
    let report = Report::from_snapshot(&txs);
    assert_eq!(report.transactions, 6);
    assert_eq!(report.totals, direct_totals(&txs));
    assert_eq!(
        report.balance.last().unwrap().balance,
        report.totals.balance
    );
    let monthly_income: Decimal = report.monthly.iter().map(|m| m.income).sum();
    assert_eq!(monthly_income, report.totals.income);
}

#[test]
fn oversized_amounts_saturate_instead_of_overflowing() {
    let mut big = tx("1", TransactionKind::Income, "Otros", "Efectivo", "2025-01-01", 0);
    big.amount = Decimal::MAX;
    let mut other = big.clone();
    other.id = "2".to_string();
    let report = Report::from_snapshot(&[big, other]);
    assert_eq!(report.totals.income, Decimal::MAX);
    assert_eq!(report.monthly[0].income, Decimal::MAX);
    assert_eq!(report.accounts[0].balance, Decimal::MAX);
    assert_eq!(report.balance[1].balance, Decimal::MAX);
}
