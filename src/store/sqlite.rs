// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use rusqlite::{Connection, Row, params};
use rust_decimal::Decimal;

use super::TransactionStore;
use crate::models::{NewTransaction, Transaction, TransactionKind};

const SELECT: &str = "SELECT id, kind, description, category, account, date, amount, payment_method, notes, receipt FROM transactions ORDER BY date DESC, id DESC";

pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    pub fn new(conn: Connection) -> Self {
        SqliteStore { conn }
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    fn query(&self, limit: Option<usize>) -> Result<Vec<Transaction>> {
        let mut data = Vec::new();
        match limit {
            Some(n) => {
                let mut stmt = self.conn.prepare(&format!("{SELECT} LIMIT ?1"))?;
                let mut rows = stmt.query(params![n as i64])?;
                while let Some(r) = rows.next()? {
                    data.push(from_row(r)?);
                }
            }
            None => {
                let mut stmt = self.conn.prepare(SELECT)?;
                let mut rows = stmt.query([])?;
                while let Some(r) = rows.next()? {
                    data.push(from_row(r)?);
                }
            }
        }
        tracing::debug!(count = data.len(), "loaded transactions from sqlite");
        Ok(data)
    }
}

fn from_row(r: &Row<'_>) -> Result<Transaction> {
    let id: i64 = r.get(0)?;
    let kind: String = r.get(1)?;
    let date: String = r.get(5)?;
    let amount: String = r.get(6)?;
    Ok(Transaction {
        id: id.to_string(),
        kind: kind
            .parse::<TransactionKind>()
            .with_context(|| format!("Transaction {} has invalid kind", id))?,
        description: r.get(2)?,
        category: r.get(3)?,
        account: r.get(4)?,
        date: chrono::NaiveDate::parse_from_str(&date, "%Y-%m-%d")
            .with_context(|| format!("Invalid date '{}' on transaction {}", date, id))?,
        amount: amount
            .parse::<Decimal>()
            .with_context(|| format!("Invalid amount '{}' on transaction {}", amount, id))?,
        payment_method: r.get(7)?,
        notes: r.get(8)?,
        receipt: r.get(9)?,
    })
}

impl TransactionStore for SqliteStore {
    fn fetch_all(&self) -> Result<Vec<Transaction>> {
        self.query(None)
    }

    fn fetch_latest(&self, n: usize) -> Result<Vec<Transaction>> {
        self.query(Some(n))
    }

    fn insert(&self, tx: &NewTransaction) -> Result<Transaction> {
        self.conn.execute(
            "INSERT INTO transactions(kind, description, category, account, date, amount, payment_method, notes, receipt)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            params![
                tx.kind.as_str(),
                tx.description,
                tx.category,
                tx.account,
                tx.date.to_string(),
                tx.amount.to_string(),
                tx.payment_method,
                tx.notes,
                tx.receipt
            ],
        )?;
        let id = self.conn.last_insert_rowid();
        Ok(tx.clone().into_transaction(id.to_string()))
    }
}
