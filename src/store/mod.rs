// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Transaction persistence. Views read through [`TransactionStore`] and
//! never mix results from two fetches.

pub mod rest;
pub mod sqlite;

use anyhow::{Context, Result};
use rusqlite::Connection;

use crate::config::{Backend, Config};
use crate::models::{NewTransaction, Transaction};

pub use rest::RestStore;
pub use sqlite::SqliteStore;

pub const ACTIVITY_LIMIT: usize = 5;

pub trait TransactionStore {
    /// Every transaction, newest date first.
    fn fetch_all(&self) -> Result<Vec<Transaction>>;

    /// The `n` newest transactions, newest date first.
    fn fetch_latest(&self, n: usize) -> Result<Vec<Transaction>>;

    /// Stores one record and returns it with its assigned identifier.
    fn insert(&self, tx: &NewTransaction) -> Result<Transaction>;
}

pub fn open_store(cfg: &Config, conn: Connection) -> Result<Box<dyn TransactionStore>> {
    match cfg.backend {
        Backend::Sqlite => Ok(Box::new(SqliteStore::new(conn))),
        Backend::Rest => {
            let url = cfg
                .rest_url
                .as_deref()
                .context("backend=rest requires rest_url (config set rest_url <url>)")?;
            let key = cfg.rest_key.clone().unwrap_or_default();
            Ok(Box::new(RestStore::new(url, &key)?))
        }
    }
}
