// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rust_decimal::Decimal;

use super::load_snapshot;
use crate::aggregate::Report;
use crate::format::{compact_millions, format_currency};
use crate::models::{AccountSummary, BalancePoint, CategoryTotal, MonthlyTotal, Totals};
use crate::store::TransactionStore;
use crate::utils::{maybe_print_json, pretty_table};

pub fn handle(store: &dyn TransactionStore, m: &clap::ArgMatches) -> Result<()> {
    let Some((name, sub)) = m.subcommand() else {
        return Ok(());
    };
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");

    // one fetch per invocation; every table below comes from it
    let snapshot = load_snapshot(store, None);
    let report = Report::from_snapshot(&snapshot);

    match name {
        "dashboard" => {
            if !maybe_print_json(json_flag, jsonl_flag, &report)? {
                println!("{}", summary_cards(&report.totals));
                println!("Expenses by category");
                println!("{}", category_table(&report.categories));
                println!("Income vs expense by month");
                println!("{}", monthly_table(&report.monthly));
                println!("Balance over time");
                println!("{}", balance_table(&report.balance));
                println!("Per-account breakdown");
                println!("{}", account_table(&report.accounts, &report.totals));
            }
        }
        "categories" => {
            if !maybe_print_json(json_flag, jsonl_flag, &report.categories)? {
                println!("{}", category_table(&report.categories));
            }
        }
        "monthly" => {
            if !maybe_print_json(json_flag, jsonl_flag, &report.monthly)? {
                println!("{}", monthly_table(&report.monthly));
            }
        }
        "balance" => {
            if !maybe_print_json(json_flag, jsonl_flag, &report.balance)? {
                println!("{}", balance_table(&report.balance));
            }
        }
        "accounts" => {
            if !maybe_print_json(json_flag, jsonl_flag, &report.accounts)? {
                println!("{}", account_table(&report.accounts, &report.totals));
            }
        }
        _ => {}
    }
    Ok(())
}

fn summary_cards(t: &Totals) -> comfy_table::Table {
    pretty_table(
        &["Total balance", "Income", "Expenses"],
        vec![vec![
            format_currency(t.balance),
            format_currency(t.income),
            format_currency(t.expense),
        ]],
    )
}

/// Whole-number share of `part` in `total`, as the pie labels show it.
pub fn share_percent(part: Decimal, total: Decimal) -> String {
    if total.is_zero() {
        return "0%".to_string();
    }
    format!("{}%", (part * Decimal::ONE_HUNDRED / total).round_dp(0))
}

fn category_table(cats: &[CategoryTotal]) -> comfy_table::Table {
    let total: Decimal = cats.iter().map(|c| c.amount).sum();
    let rows = cats
        .iter()
        .map(|c| {
            vec![
                c.category.clone(),
                format_currency(c.amount),
                share_percent(c.amount, total),
                c.color.to_string(),
            ]
        })
        .collect();
    pretty_table(&["Category", "Spent", "Share", "Color"], rows)
}

fn monthly_table(months: &[MonthlyTotal]) -> comfy_table::Table {
    let rows = months
        .iter()
        .map(|m| {
            vec![
                format!("{} {}", m.label, m.year),
                format_currency(m.income),
                format_currency(m.expense),
                format!("{} / {}", compact_millions(m.income), compact_millions(m.expense)),
            ]
        })
        .collect();
    pretty_table(&["Month", "Income", "Expense", "Scale"], rows)
}

fn balance_table(points: &[BalancePoint]) -> comfy_table::Table {
    let rows = points
        .iter()
        .map(|p| vec![p.label.clone(), p.date.to_string(), format_currency(p.balance)])
        .collect();
    pretty_table(&["Label", "Date", "Balance"], rows)
}

fn account_table(accounts: &[AccountSummary], totals: &Totals) -> comfy_table::Table {
    let mut rows: Vec<Vec<String>> = accounts
        .iter()
        .map(|a| {
            vec![
                a.account.clone(),
                format_currency(a.income),
                format_currency(a.expense),
                format_currency(a.balance),
            ]
        })
        .collect();
    rows.push(vec![
        "Total".to_string(),
        format_currency(totals.income),
        format_currency(totals.expense),
        format_currency(totals.balance),
    ]);
    pretty_table(&["Account", "Income", "Expense", "Balance"], rows)
}
