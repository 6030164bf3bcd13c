// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Result, anyhow};
use std::path::Path;

use crate::models::Transaction;
use crate::store::TransactionStore;

pub fn handle(store: &dyn TransactionStore, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("transactions", sub)) => {
            let fmt = sub.get_one::<String>("format").unwrap().to_lowercase();
            let out = sub.get_one::<String>("out").unwrap().trim();
            let mut data = store.fetch_all()?;
            // oldest first, same column order the importer reads
            data.reverse();
            export_transactions(&data, &fmt, Path::new(out))?;
            println!("Exported {} transactions to {}", data.len(), out);
            Ok(())
        }
        _ => Ok(()),
    }
}

pub fn export_transactions(data: &[Transaction], fmt: &str, out: &Path) -> Result<()> {
    match fmt {
        "csv" => {
            let mut wtr = csv::Writer::from_path(out)?;
            wtr.write_record([
                "kind",
                "description",
                "category",
                "account",
                "date",
                "amount",
                "payment_method",
                "notes",
                "receipt",
            ])?;
            for t in data {
                let date = t.date.to_string();
                let amount = t.amount.to_string();
                wtr.write_record([
                    t.kind.as_str(),
                    t.description.as_str(),
                    t.category.as_str(),
                    t.account.as_str(),
                    date.as_str(),
                    amount.as_str(),
                    t.payment_method.as_str(),
                    t.notes.as_deref().unwrap_or_default(),
                    t.receipt.as_deref().unwrap_or_default(),
                ])?;
            }
            wtr.flush()?;
        }
        "json" => {
            std::fs::write(out, serde_json::to_string_pretty(data)?)?;
        }
        other => return Err(anyhow!("Unknown format: {} (use csv|json)", other)),
    }
    Ok(())
}
