// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Hosted backend speaking the PostgREST dialect. Column keys at this
//! boundary are the hosted table's Spanish names.

use anyhow::{Context, Result, anyhow};
use chrono::NaiveDate;
use reqwest::blocking::{Client, RequestBuilder};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::TransactionStore;
use crate::models::{NewTransaction, Transaction, TransactionKind};
use crate::utils::http_client;

const TABLE_PATH: &str = "rest/v1/transacciones";

pub struct RestStore {
    endpoint: String,
    key: String,
    client: Client,
}

#[derive(Debug, Deserialize)]
struct RemoteRow {
    id: serde_json::Value,
    tipo: String,
    descripcion: String,
    categoria: String,
    cuenta: String,
    fecha: String,
    monto: Decimal,
    metodo_pago: String,
    notas: Option<String>,
    recibo: Option<String>,
}

#[derive(Debug, Serialize)]
struct InsertRow<'a> {
    tipo: &'static str,
    descripcion: &'a str,
    categoria: &'a str,
    cuenta: &'a str,
    fecha: String,
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    monto: Decimal,
    metodo_pago: &'a str,
    notas: Option<&'a str>,
    recibo: Option<&'a str>,
}

fn remote_kind(kind: TransactionKind) -> &'static str {
    match kind {
        TransactionKind::Income => "ingreso",
        TransactionKind::Expense => "gasto",
    }
}

impl TryFrom<RemoteRow> for Transaction {
    type Error = anyhow::Error;

    fn try_from(row: RemoteRow) -> Result<Self> {
        let id = match row.id {
            serde_json::Value::String(s) => s,
            other => other.to_string(),
        };
        // timestamps come back as 2025-06-01T00:00:00, keep the date part
        let day = row.fecha.get(..10).unwrap_or(&row.fecha);
        Ok(Transaction {
            kind: row
                .tipo
                .parse()
                .with_context(|| format!("Transaction {} has invalid kind", id))?,
            date: NaiveDate::parse_from_str(day, "%Y-%m-%d")
                .with_context(|| format!("Invalid date '{}' on transaction {}", row.fecha, id))?,
            id,
            description: row.descripcion,
            category: row.categoria,
            account: row.cuenta,
            amount: row.monto,
            payment_method: row.metodo_pago,
            notes: row.notas,
            receipt: row.recibo,
        })
    }
}

impl RestStore {
    pub fn new(base_url: &str, key: &str) -> Result<Self> {
        let base = base_url.trim().trim_end_matches('/');
        if base.is_empty() {
            return Err(anyhow!("REST backend URL is empty"));
        }
        Ok(RestStore {
            endpoint: format!("{}/{}", base, TABLE_PATH),
            key: key.to_string(),
            client: http_client()?,
        })
    }

    fn authorized(&self, req: RequestBuilder) -> RequestBuilder {
        if self.key.is_empty() {
            req
        } else {
            req.header("apikey", &self.key).bearer_auth(&self.key)
        }
    }

    fn fetch(&self, limit: Option<usize>) -> Result<Vec<Transaction>> {
        let mut query: Vec<(&str, String)> =
            vec![("select", "*".into()), ("order", "fecha.desc".into())];
        if let Some(n) = limit {
            query.push(("limit", n.to_string()));
        }
        let req = self.authorized(self.client.get(&self.endpoint).query(&query));
        let rows: Vec<RemoteRow> = req
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(|err| {
                tracing::error!(endpoint = %self.endpoint, error = %err, "fetching transactions failed");
                err
            })
            .context("Fetching transactions from the hosted backend")?
            .json()
            .context("Decoding transactions from the hosted backend")?;
        let data = rows
            .into_iter()
            .map(Transaction::try_from)
            .collect::<Result<Vec<_>>>()?;
        tracing::debug!(count = data.len(), "loaded transactions from rest backend");
        Ok(data)
    }
}

impl TransactionStore for RestStore {
    fn fetch_all(&self) -> Result<Vec<Transaction>> {
        self.fetch(None)
    }

    fn fetch_latest(&self, n: usize) -> Result<Vec<Transaction>> {
        self.fetch(Some(n))
    }

    fn insert(&self, tx: &NewTransaction) -> Result<Transaction> {
        let body = [InsertRow {
            tipo: remote_kind(tx.kind),
            descripcion: &tx.description,
            categoria: &tx.category,
            cuenta: &tx.account,
            fecha: tx.date.format("%Y-%m-%d").to_string(),
            monto: tx.amount,
            metodo_pago: &tx.payment_method,
            notas: tx.notes.as_deref(),
            recibo: tx.receipt.as_deref(),
        }];
        let req = self
            .authorized(self.client.post(&self.endpoint))
            .header("Prefer", "return=representation")
            .json(&body);
        let mut rows: Vec<RemoteRow> = req
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(|err| {
                tracing::error!(endpoint = %self.endpoint, error = %err, "inserting transaction failed");
                err
            })
            .context("Saving transaction to the hosted backend")?
            .json()
            .context("Decoding saved transaction")?;
        let row = rows
            .pop()
            .context("Hosted backend returned no row for the insert")?;
        Transaction::try_from(row)
    }
}
