// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Peso amounts and Spanish calendar strings, formatted the way the
//! dashboard shows them (es-CO, no fraction digits).

use chrono::{Datelike, NaiveDate};
use rust_decimal::{Decimal, RoundingStrategy};

const MONTHS_LONG: [&str; 12] = [
    "enero",
    "febrero",
    "marzo",
    "abril",
    "mayo",
    "junio",
    "julio",
    "agosto",
    "septiembre",
    "octubre",
    "noviembre",
    "diciembre",
];

const MONTHS_SHORT: [&str; 12] = [
    "ene", "feb", "mar", "abr", "may", "jun", "jul", "ago", "sep", "oct", "nov", "dic",
];

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}

/// Integer pesos with `.` grouping, no symbol: `1.388.889`.
pub fn format_amount_plain(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let digits = rounded.abs().trunc().to_string();
    let grouped = group_thousands(&digits);
    if rounded.is_sign_negative() && !rounded.is_zero() {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// `$ 1.388.889`, `-$ 2.000.000`.
pub fn format_currency(amount: Decimal) -> String {
    let plain = format_amount_plain(amount);
    match plain.strip_prefix('-') {
        Some(rest) => format!("-$ {}", rest),
        None => format!("$ {}", plain),
    }
}

/// Axis-style millions label: `$3.5M`.
pub fn compact_millions(amount: Decimal) -> String {
    let millions = (amount / Decimal::from(1_000_000))
        .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
    format!("${:.1}M", millions)
}

pub fn month_label(date: NaiveDate) -> String {
    MONTHS_SHORT[date.month0() as usize].to_string()
}

pub fn month_name(month: u32) -> &'static str {
    MONTHS_LONG[(month.clamp(1, 12) - 1) as usize]
}

/// `1 jun`
pub fn day_month_label(date: NaiveDate) -> String {
    format!("{} {}", date.day(), month_label(date))
}

/// `17 de abril de 2029`
pub fn format_long_date(date: NaiveDate) -> String {
    format!(
        "{} de {} de {}",
        date.day(),
        month_name(date.month()),
        date.year()
    )
}

/// `dd/MM/yyyy`
pub fn format_short_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn currency_groups_and_rounds() {
        assert_eq!(format_currency(d("1388888.89")), "$ 1.388.889");
        assert_eq!(format_currency(d("0")), "$ 0");
        assert_eq!(format_currency(d("999")), "$ 999");
        assert_eq!(format_currency(d("1000")), "$ 1.000");
        assert_eq!(format_currency(d("-2000000")), "-$ 2.000.000");
        assert_eq!(format_currency(d("0.5")), "$ 1");
        assert_eq!(format_currency(d("-0.4")), "$ 0");
    }

    #[test]
    fn compact_label() {
        assert_eq!(compact_millions(d("3500000")), "$3.5M");
        assert_eq!(compact_millions(d("250000")), "$0.3M");
    }

    #[test]
    fn spanish_dates() {
        let date = NaiveDate::from_ymd_opt(2029, 4, 17).unwrap();
        assert_eq!(format_long_date(date), "17 de abril de 2029");
        assert_eq!(format_short_date(date), "17/04/2029");
        assert_eq!(month_label(date), "abr");
        assert_eq!(
            day_month_label(NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()),
            "1 jun"
        );
    }
}
