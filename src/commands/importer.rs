// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};

use crate::form::TransactionForm;
use crate::store::TransactionStore;
use crate::utils::{notify, today};

#[derive(Debug, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub imported: usize,
    pub skipped: usize,
}

pub fn handle(store: &dyn TransactionStore, m: &clap::ArgMatches) -> Result<()> {
    if let Some(("transactions", sub)) = m.subcommand() {
        let path = sub.get_one::<String>("path").unwrap().trim();
        let summary = import_csv(store, path)?;
        println!(
            "Imported {} transactions ({} skipped)",
            summary.imported, summary.skipped
        );
    }
    Ok(())
}

/// Expected header:
/// kind,description,category,account,date,amount,payment_method,notes,receipt
pub fn import_csv(store: &dyn TransactionStore, path: &str) -> Result<ImportSummary> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("Open CSV {}", path))?;
    let today = today();
    let mut summary = ImportSummary::default();
    for (i, rec) in rdr.deserialize::<TransactionForm>().enumerate() {
        // header is line 1
        let line = i + 2;
        let form = match rec {
            Ok(f) => f,
            Err(err) => {
                notify("Skipped", &format!("line {}: {}", line, err));
                summary.skipped += 1;
                continue;
            }
        };
        match form.validate(today) {
            Ok(tx) => {
                store
                    .insert(&tx)
                    .with_context(|| format!("Saving line {} of {}", line, path))?;
                summary.imported += 1;
            }
            Err(err) => {
                notify("Skipped", &format!("line {}: {}", line, err));
                summary.skipped += 1;
            }
        }
    }
    tracing::info!(imported = summary.imported, skipped = summary.skipped, "csv import done");
    Ok(summary)
}
