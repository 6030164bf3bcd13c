// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{Local, NaiveDate, TimeDelta};
use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;

use super::{GoalPlan, GoalPlanner};
use crate::error::GoalError;
use crate::models::GoalEstimate;

// "50 millones", "2,5 millón", "10m"
static MILLIONS_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(\d+(?:[.,]\d+)?)\s*(?:millones|millón|millon|millions?|mill|m)\b")
        .expect("valid millions regex")
});

// "2.500.000", "12,000,000"
static GROUPED_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d{1,3}(?:[.,]\d{3})+").expect("valid grouped-number regex"));

static TERM_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(\d+)\s*(meses|mes|años|año|anos|ano|months?|years?)\b")
        .expect("valid term regex")
});

const DEFAULT_TERM_MONTHS: u32 = 12;
const DAYS_PER_MONTH: i64 = 30;

const HOUSING: (&[&str], [&str; 2]) = (
    &["casa", "vivienda"],
    [
        "Investiga opciones de crédito hipotecario para complementar tu ahorro",
        "Considera ahorrar primero para la cuota inicial (30% del valor)",
    ],
);
const VEHICLE: (&[&str], [&str; 2]) = (
    &["carro", "vehículo", "vehiculo"],
    [
        "Evalúa opciones de crédito vehicular con tasas preferenciales",
        "Considera vehículos usados en buen estado para reducir el costo",
    ],
);
const TRAVEL: (&[&str], [&str; 2]) = (
    &["viaje", "vacaciones"],
    [
        "Busca ofertas y promociones de temporada baja",
        "Considera destinos locales para reducir costos de transporte",
    ],
);

fn target_amount(query: &str) -> Decimal {
    if let Some(caps) = MILLIONS_RE.captures(query) {
        let n = caps[1].replace(',', ".");
        if let Ok(d) = n.parse::<Decimal>() {
            // out of range reads as no amount
            return d
                .checked_mul(Decimal::from(1_000_000))
                .unwrap_or(Decimal::ZERO);
        }
    }
    if let Some(m) = GROUPED_RE.find(query) {
        let digits: String = m.as_str().chars().filter(char::is_ascii_digit).collect();
        if let Ok(d) = digits.parse::<Decimal>() {
            return d;
        }
    }
    Decimal::ZERO
}

fn term_months(query: &str) -> u32 {
    let Some(caps) = TERM_RE.captures(query) else {
        return DEFAULT_TERM_MONTHS;
    };
    let n: u32 = caps[1].parse().unwrap_or(u32::MAX);
    let unit = caps[2].to_lowercase();
    if unit.starts_with('a') || unit.starts_with('y') {
        n.saturating_mul(12)
    } else {
        n
    }
}

fn recommendations(monthly: Decimal, query: &str) -> Vec<String> {
    let mut out: Vec<&str> = if monthly > Decimal::from(1_000_000) {
        vec![
            "Considera reducir gastos en entretenimiento y restaurantes",
            "Busca ingresos adicionales o un trabajo de medio tiempo",
            "Revisa suscripciones y servicios que no uses frecuentemente",
        ]
    } else if monthly > Decimal::from(500_000) {
        vec![
            "Reduce gastos en compras no esenciales",
            "Utiliza cupones y ofertas para las compras necesarias",
            "Considera cocinar más en casa en lugar de comer fuera",
        ]
    } else {
        vec![
            "Establece un presupuesto mensual y síguelo estrictamente",
            "Automatiza tu ahorro para que sea más fácil cumplir la meta",
            "Busca formas de aumentar tus ingresos gradualmente",
        ]
    };

    let lower = query.to_lowercase();
    // first matching goal type only
    if let Some((_, extra)) = [HOUSING, VEHICLE, TRAVEL]
        .into_iter()
        .find(|(words, _)| words.iter().any(|w| lower.contains(w)))
    {
        out.extend(extra);
    }
    out.into_iter().map(str::to_string).collect()
}

/// Reads a target amount and term out of free text and spreads the amount
/// evenly over the term. Months are counted as 30 days when projecting
/// the target date.
pub fn estimate(query: &str, today: NaiveDate) -> Result<GoalEstimate, GoalError> {
    let target = target_amount(query);
    if target.is_zero() {
        return Err(GoalError::NotRecognized);
    }
    let term = term_months(query);
    if term == 0 {
        return Err(GoalError::ZeroTerm);
    }
    let monthly = (target / Decimal::from(term)).round_dp(2);
    let target_date = TimeDelta::try_days(i64::from(term) * DAYS_PER_MONTH)
        .and_then(|span| today.checked_add_signed(span))
        .ok_or(GoalError::TermTooLong)?;
    Ok(GoalEstimate {
        monthly_saving: monthly,
        target_date,
        recommendations: recommendations(monthly, query),
        target_amount: target,
        term_months: term,
    })
}

#[derive(Debug, Clone, Default)]
pub struct LocalPlanner {
    today: Option<NaiveDate>,
}

impl LocalPlanner {
    pub fn new() -> Self {
        LocalPlanner { today: None }
    }

    pub fn with_today(today: NaiveDate) -> Self {
        LocalPlanner { today: Some(today) }
    }
}

impl GoalPlanner for LocalPlanner {
    fn plan(&self, query: &str) -> Result<GoalPlan, GoalError> {
        let today = self.today.unwrap_or_else(|| Local::now().date_naive());
        estimate(query, today).map(GoalPlan::Local)
    }
}
