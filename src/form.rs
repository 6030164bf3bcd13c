// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::FormError;
use crate::models::{NewTransaction, TransactionKind};

/// Largest accepted amount, 10^15 pesos. Keeps report sums in range.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(2_764_472_320, 232_830, 0, false, 0);

/// Raw data-entry fields as typed by the user (CLI flags or a CSV row).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TransactionForm {
    pub kind: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub account: Option<String>,
    pub date: Option<String>,
    pub amount: Option<String>,
    pub payment_method: Option<String>,
    pub notes: Option<String>,
    pub receipt: Option<String>,
}

fn filled(v: &Option<String>) -> Option<String> {
    v.as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

impl TransactionForm {
    /// Checks required fields and parses the typed ones. A missing kind
    /// defaults to expense and a missing date to `today`.
    pub fn validate(&self, today: NaiveDate) -> Result<NewTransaction, FormError> {
        let description = filled(&self.description);
        let category = filled(&self.category);
        let account = filled(&self.account);
        let amount_raw = filled(&self.amount);
        let payment_method = filled(&self.payment_method);

        let mut missing = Vec::new();
        if description.is_none() {
            missing.push("description");
        }
        if category.is_none() {
            missing.push("category");
        }
        if account.is_none() {
            missing.push("account");
        }
        if amount_raw.is_none() {
            missing.push("amount");
        }
        if payment_method.is_none() {
            missing.push("payment_method");
        }
        let (
            Some(description),
            Some(category),
            Some(account),
            Some(amount_raw),
            Some(payment_method),
        ) = (description, category, account, amount_raw, payment_method)
        else {
            return Err(FormError::MissingFields(missing));
        };

        let kind = match filled(&self.kind) {
            Some(k) => k
                .parse::<TransactionKind>()
                .map_err(|_| FormError::InvalidKind(k.clone()))?,
            None => TransactionKind::Expense,
        };

        let amount = amount_raw
            .parse::<Decimal>()
            .ok()
            .filter(|a| *a > Decimal::ZERO && *a <= MAX_AMOUNT)
            .ok_or_else(|| FormError::InvalidAmount(amount_raw.clone()))?;

        let date = match filled(&self.date) {
            Some(d) => NaiveDate::parse_from_str(&d, "%Y-%m-%d")
                .map_err(|_| FormError::InvalidDate(d.clone()))?,
            None => today,
        };

        Ok(NewTransaction {
            kind,
            description,
            category,
            account,
            date,
            amount,
            payment_method,
            notes: filled(&self.notes),
            receipt: filled(&self.receipt),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
    }

    fn complete() -> TransactionForm {
        TransactionForm {
            kind: Some("gasto".into()),
            description: Some("Mercado".into()),
            category: Some("Alimentación".into()),
            account: Some("Efectivo".into()),
            date: Some("2025-06-01".into()),
            amount: Some("85000".into()),
            payment_method: Some("Nequi".into()),
            notes: Some("  ".into()),
            receipt: None,
        }
    }

    #[test]
    fn complete_form_validates() {
        let tx = complete().validate(today()).unwrap();
        assert_eq!(tx.kind, TransactionKind::Expense);
        assert_eq!(tx.amount, Decimal::from(85000));
        assert_eq!(tx.date, NaiveDate::from_ymd_opt(2025, 6, 1).unwrap());
        assert_eq!(tx.notes, None);
    }

    #[test]
    fn missing_fields_are_listed() {
        let mut form = complete();
        form.description = Some("".into());
        form.payment_method = None;
        let err = form.validate(today()).unwrap_err();
        assert_eq!(
            err,
            FormError::MissingFields(vec!["description", "payment_method"])
        );
    }

    #[test]
    fn date_defaults_to_today_and_amount_must_be_positive() {
        let mut form = complete();
        form.date = None;
        assert_eq!(form.validate(today()).unwrap().date, today());

        form.amount = Some("-5".into());
        assert_eq!(
            form.validate(today()).unwrap_err(),
            FormError::InvalidAmount("-5".into())
        );
    }

    #[test]
    fn amount_above_cap_is_rejected() {
        let mut form = complete();
        form.amount = Some("1000000000000000".into());
        assert_eq!(form.validate(today()).unwrap().amount, MAX_AMOUNT);

        form.amount = Some("1000000000000000.01".into());
        assert!(matches!(
            form.validate(today()),
            Err(FormError::InvalidAmount(_))
        ));
        form.amount = Some("79228162514264337593543950335".into());
        assert!(matches!(
            form.validate(today()),
            Err(FormError::InvalidAmount(_))
        ));
    }

    #[test]
    fn unknown_kind_rejected() {
        let mut form = complete();
        form.kind = Some("transfer".into());
        assert_eq!(
            form.validate(today()).unwrap_err(),
            FormError::InvalidKind("transfer".into())
        );
    }
}
