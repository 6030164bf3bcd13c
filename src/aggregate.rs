// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Report projections derived from a transaction snapshot.
//!
//! Every function here is a fold over a slice; nothing validates the
//! records. Build a [`Report`] from one fetch so all projections agree.

use std::collections::HashMap;

use chrono::Datelike;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::format::{day_month_label, month_label};
use crate::models::{
    AccountSummary, BalancePoint, CategoryTotal, MonthlyTotal, Totals, Transaction,
    TransactionKind,
};

pub const DEFAULT_CATEGORY_COLOR: &str = "#9CA3AF";

const CATEGORY_COLORS: &[(&str, &str)] = &[
    ("Alimentación", "#E76161"),
    ("Transporte", "#1A5F7A"),
    ("Entretenimiento", "#159947"),
    ("Servicios", "#F39C12"),
    ("Salud", "#3498DB"),
    ("Educación", "#E67E22"),
    ("Compras", "#E91E63"),
    ("Otros", "#9B59B6"),
];

pub fn category_color(category: &str) -> &'static str {
    CATEGORY_COLORS
        .iter()
        .find(|(name, _)| *name == category)
        .map(|(_, color)| *color)
        .unwrap_or(DEFAULT_CATEGORY_COLOR)
}

pub fn has_known_color(category: &str) -> bool {
    CATEGORY_COLORS.iter().any(|(name, _)| *name == category)
}

/// Expense totals per category, in order of first appearance.
pub fn category_totals(txs: &[Transaction]) -> Vec<CategoryTotal> {
    let mut out: Vec<CategoryTotal> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();
    for tx in txs.iter().filter(|t| t.kind == TransactionKind::Expense) {
        match index.get(tx.category.as_str()) {
            Some(&i) => out[i].amount = out[i].amount.saturating_add(tx.amount),
            None => {
                index.insert(tx.category.as_str(), out.len());
                out.push(CategoryTotal {
                    category: tx.category.clone(),
                    amount: tx.amount,
                    color: category_color(&tx.category),
                });
            }
        }
    }
    out
}

/// Income and expense per calendar month, oldest month first.
pub fn monthly_totals(txs: &[Transaction]) -> Vec<MonthlyTotal> {
    let mut buckets: HashMap<(i32, u32), MonthlyTotal> = HashMap::new();
    for tx in txs {
        let key = (tx.date.year(), tx.date.month());
        let entry = buckets.entry(key).or_insert_with(|| MonthlyTotal {
            year: key.0,
            month: key.1,
            label: month_label(tx.date),
            income: Decimal::ZERO,
            expense: Decimal::ZERO,
        });
        match tx.kind {
            TransactionKind::Income => entry.income = entry.income.saturating_add(tx.amount),
            TransactionKind::Expense => entry.expense = entry.expense.saturating_add(tx.amount),
        }
    }
    let mut out: Vec<MonthlyTotal> = buckets.into_values().collect();
    out.sort_by_key(|m| (m.year, m.month));
    out
}

/// Running balance from zero, one point per transaction in date order.
/// Same-day transactions keep their input order.
pub fn balance_series(txs: &[Transaction]) -> Vec<BalancePoint> {
    let mut sorted: Vec<&Transaction> = txs.iter().collect();
    sorted.sort_by_key(|t| t.date);
    let mut running = Decimal::ZERO;
    sorted
        .into_iter()
        .map(|tx| {
            running = running.saturating_add(tx.signed_amount());
            BalancePoint {
                date: tx.date,
                label: day_month_label(tx.date),
                balance: running,
            }
        })
        .collect()
}

/// Per-account income, expense and net, in order of first appearance.
pub fn account_summaries(txs: &[Transaction]) -> Vec<AccountSummary> {
    let mut out: Vec<AccountSummary> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();
    for tx in txs {
        let i = match index.get(tx.account.as_str()) {
            Some(&i) => i,
            None => {
                index.insert(tx.account.as_str(), out.len());
                out.push(AccountSummary {
                    account: tx.account.clone(),
                    income: Decimal::ZERO,
                    expense: Decimal::ZERO,
                    balance: Decimal::ZERO,
                });
                out.len() - 1
            }
        };
        let summary = &mut out[i];
        match tx.kind {
            TransactionKind::Income => summary.income = summary.income.saturating_add(tx.amount),
            TransactionKind::Expense => summary.expense = summary.expense.saturating_add(tx.amount),
        }
        summary.balance = summary.balance.saturating_add(tx.signed_amount());
    }
    out
}

/// Sums of the account summaries' fields. All sums saturate at the
/// decimal range.
pub fn grand_totals(accounts: &[AccountSummary]) -> Totals {
    accounts.iter().fold(Totals::default(), |acc, a| Totals {
        income: acc.income.saturating_add(a.income),
        expense: acc.expense.saturating_add(a.expense),
        balance: acc.balance.saturating_add(a.balance),
    })
}

/// Totals straight from the transactions; must match [`grand_totals`].
pub fn direct_totals(txs: &[Transaction]) -> Totals {
    txs.iter().fold(Totals::default(), |acc, tx| match tx.kind {
        TransactionKind::Income => Totals {
            income: acc.income.saturating_add(tx.amount),
            balance: acc.balance.saturating_add(tx.amount),
            ..acc
        },
        TransactionKind::Expense => Totals {
            expense: acc.expense.saturating_add(tx.amount),
            balance: acc.balance.saturating_sub(tx.amount),
            ..acc
        },
    })
}

#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub transactions: usize,
    pub categories: Vec<CategoryTotal>,
    pub monthly: Vec<MonthlyTotal>,
    pub balance: Vec<BalancePoint>,
    pub accounts: Vec<AccountSummary>,
    pub totals: Totals,
}

impl Report {
    pub fn from_snapshot(txs: &[Transaction]) -> Self {
        let accounts = account_summaries(txs);
        let totals = grand_totals(&accounts);
        Report {
            transactions: txs.len(),
            categories: category_totals(txs),
            monthly: monthly_totals(txs),
            balance: balance_series(txs),
            accounts,
            totals,
        }
    }
}
