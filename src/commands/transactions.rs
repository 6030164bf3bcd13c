// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use super::load_snapshot;
use crate::form::TransactionForm;
use crate::format::{format_currency, format_short_date};
use crate::models::{ACCOUNTS, CATEGORIES, PAYMENT_METHODS, Transaction, TransactionKind};
use crate::store::{ACTIVITY_LIMIT, TransactionStore};
use crate::utils::{maybe_print_json, notify, pretty_table, today};

pub fn handle(store: &dyn TransactionStore, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(store, sub)?,
        Some(("list", sub)) => list(store, sub)?,
        Some(("options", _)) => options(),
        _ => {}
    }
    Ok(())
}

pub fn form_from_matches(sub: &clap::ArgMatches) -> TransactionForm {
    let get = |name: &str| sub.get_one::<String>(name).cloned();
    TransactionForm {
        kind: get("kind"),
        description: get("description"),
        category: get("category"),
        account: get("account"),
        date: get("date"),
        amount: get("amount"),
        payment_method: get("method"),
        notes: get("notes"),
        receipt: get("receipt").map(|p| receipt_name(&p)),
    }
}

/// Only the file name of a receipt is kept.
fn receipt_name(path: &str) -> String {
    std::path::Path::new(path.trim())
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.trim().to_string())
}

fn kind_label(kind: TransactionKind) -> &'static str {
    match kind {
        TransactionKind::Income => "Income",
        TransactionKind::Expense => "Expense",
    }
}

fn add(store: &dyn TransactionStore, sub: &clap::ArgMatches) -> Result<()> {
    let form = form_from_matches(sub);
    let new_tx = match form.validate(today()) {
        Ok(tx) => tx,
        Err(err) => {
            notify("Error", &format!("{}. Nothing was saved.", err));
            return Ok(());
        }
    };
    match store.insert(&new_tx) {
        Ok(tx) => println!(
            "{} of {} recorded ({} / {}, id {})",
            kind_label(tx.kind),
            format_currency(tx.amount),
            tx.category,
            tx.account,
            tx.id
        ),
        Err(err) => {
            tracing::error!(error = %format!("{:#}", err), "saving transaction failed");
            notify("Error", "Could not save the transaction. Try again.");
        }
    }
    Ok(())
}

fn rows(data: &[Transaction]) -> Vec<Vec<String>> {
    data.iter()
        .map(|t| {
            vec![
                format_short_date(t.date),
                kind_label(t.kind).to_string(),
                t.description.clone(),
                t.category.clone(),
                t.account.clone(),
                t.payment_method.clone(),
                format_currency(t.kind.signed(t.amount)),
                t.notes.clone().unwrap_or_default(),
            ]
        })
        .collect()
}

const HEADERS: [&str; 8] = [
    "Date",
    "Kind",
    "Description",
    "Category",
    "Account",
    "Method",
    "Amount",
    "Notes",
];

fn list(store: &dyn TransactionStore, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = load_snapshot(store, sub.get_one::<usize>("limit").copied());
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        println!("{}", pretty_table(&HEADERS, rows(&data)));
    }
    Ok(())
}

pub fn activity(store: &dyn TransactionStore, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = load_snapshot(store, Some(ACTIVITY_LIMIT));
    if maybe_print_json(json_flag, jsonl_flag, &data)? {
        return Ok(());
    }
    if data.is_empty() {
        println!("No transactions recorded yet.");
        return Ok(());
    }
    println!("{}", pretty_table(&HEADERS, rows(&data)));
    Ok(())
}

fn options() {
    let n = CATEGORIES.len().max(ACCOUNTS.len()).max(PAYMENT_METHODS.len());
    let cell = |list: &[&str], i: usize| list.get(i).map(|s| s.to_string()).unwrap_or_default();
    let data = (0..n)
        .map(|i| vec![cell(CATEGORIES, i), cell(ACCOUNTS, i), cell(PAYMENT_METHODS, i)])
        .collect();
    println!(
        "{}",
        pretty_table(&["Categories", "Accounts", "Payment methods"], data)
    );
}
