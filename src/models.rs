// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::fmt;
use std::str::FromStr;

use anyhow::anyhow;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub const CATEGORIES: &[&str] = &[
    "Alimentación",
    "Transporte",
    "Entretenimiento",
    "Servicios",
    "Salud",
    "Educación",
    "Compras",
    "Otros",
];

pub const ACCOUNTS: &[&str] = &[
    "Cuenta Corriente",
    "Cuenta de Ahorros",
    "Tarjeta de Crédito",
    "Efectivo",
];

pub const PAYMENT_METHODS: &[&str] = &[
    "Efectivo",
    "Tarjeta de Débito",
    "Tarjeta de Crédito",
    "Transferencia",
    "PSE",
    "Nequi",
    "Daviplata",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Income => "income",
            TransactionKind::Expense => "expense",
        }
    }

    /// Amount with the sign it contributes to a balance.
    pub fn signed(&self, amount: Decimal) -> Decimal {
        match self {
            TransactionKind::Income => amount,
            TransactionKind::Expense => -amount,
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" | "ingreso" => Ok(TransactionKind::Income),
            "expense" | "gasto" => Ok(TransactionKind::Expense),
            other => Err(anyhow!("Unknown transaction kind '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub kind: TransactionKind,
    pub description: String,
    pub category: String,
    pub account: String,
    pub date: NaiveDate,
    pub amount: Decimal,
    pub payment_method: String,
    pub notes: Option<String>,
    pub receipt: Option<String>,
}

impl Transaction {
    pub fn signed_amount(&self) -> Decimal {
        self.kind.signed(self.amount)
    }
}

/// Insert payload; the store assigns the identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewTransaction {
    pub kind: TransactionKind,
    pub description: String,
    pub category: String,
    pub account: String,
    pub date: NaiveDate,
    pub amount: Decimal,
    pub payment_method: String,
    pub notes: Option<String>,
    pub receipt: Option<String>,
}

impl NewTransaction {
    pub fn into_transaction(self, id: String) -> Transaction {
        Transaction {
            id,
            kind: self.kind,
            description: self.description,
            category: self.category,
            account: self.account,
            date: self.date,
            amount: self.amount,
            payment_method: self.payment_method,
            notes: self.notes,
            receipt: self.receipt,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryTotal {
    pub category: String,
    pub amount: Decimal,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyTotal {
    pub year: i32,
    pub month: u32,
    pub label: String,
    pub income: Decimal,
    pub expense: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BalancePoint {
    pub date: NaiveDate,
    pub label: String,
    pub balance: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AccountSummary {
    pub account: String,
    pub income: Decimal,
    pub expense: Decimal,
    pub balance: Decimal,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Totals {
    pub income: Decimal,
    pub expense: Decimal,
    pub balance: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GoalEstimate {
    pub monthly_saving: Decimal,
    pub target_date: NaiveDate,
    pub recommendations: Vec<String>,
    pub target_amount: Decimal,
    pub term_months: u32,
}
