// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod config;
pub mod doctor;
pub mod exporter;
pub mod goal;
pub mod importer;
pub mod reports;
pub mod transactions;

use crate::models::Transaction;
use crate::store::TransactionStore;
use crate::utils::notify;

/// One snapshot for a view. A failed fetch is logged and reported, and the
/// view renders empty instead of aborting.
pub fn load_snapshot(store: &dyn TransactionStore, limit: Option<usize>) -> Vec<Transaction> {
    let res = match limit {
        Some(n) => store.fetch_latest(n),
        None => store.fetch_all(),
    };
    match res {
        Ok(txs) => txs,
        Err(err) => {
            tracing::error!(error = %format!("{:#}", err), "could not load transactions");
            notify("Error", "Could not load transactions; showing an empty view.");
            Vec::new()
        }
    }
}
