// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rust_decimal::Decimal;

use crate::aggregate::{account_summaries, direct_totals, grand_totals, has_known_color};
use crate::config::{Backend, Config, GoalMode};
use crate::models::Transaction;
use crate::store::TransactionStore;
use crate::utils::pretty_table;

pub fn handle(store: &dyn TransactionStore, cfg: &Config) -> Result<()> {
    let txs = store.fetch_all()?;
    let rows = find_issues(&txs, cfg);
    if rows.is_empty() {
        println!("✅ doctor: no issues found");
    } else {
        println!("{}", pretty_table(&["Issue", "Detail"], rows));
    }
    Ok(())
}

pub fn find_issues(txs: &[Transaction], cfg: &Config) -> Vec<Vec<String>> {
    let mut rows = Vec::new();

    if cfg.backend == Backend::Rest && cfg.rest_url.is_none() {
        rows.push(vec!["missing_rest_url".into(), "backend=rest".into()]);
    }
    if cfg.goal_mode == GoalMode::Remote && cfg.webhook_url.is_none() {
        rows.push(vec!["missing_webhook_url".into(), "goal_mode=remote".into()]);
    }

    // amounts are not validated by the reports
    for t in txs.iter().filter(|t| t.amount <= Decimal::ZERO) {
        rows.push(vec![
            "non_positive_amount".into(),
            format!("{} {} {}", t.id, t.date, t.amount),
        ]);
    }

    let mut uncolored: Vec<&str> = Vec::new();
    for t in txs {
        if !has_known_color(&t.category) && !uncolored.contains(&t.category.as_str()) {
            uncolored.push(&t.category);
        }
    }
    for c in uncolored {
        rows.push(vec!["uncolored_category".into(), c.to_string()]);
    }

    let by_account = grand_totals(&account_summaries(txs));
    let direct = direct_totals(txs);
    if by_account != direct {
        rows.push(vec![
            "totals_mismatch".into(),
            format!("accounts={:?} direct={:?}", by_account, direct),
        ]);
    }
    rows
}
