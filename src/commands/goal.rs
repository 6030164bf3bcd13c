// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};

use crate::config::{Config, GoalMode};
use crate::error::GoalError;
use crate::format::{format_currency, format_long_date};
use crate::goals::{
    EXAMPLE_QUERIES, GoalPlan, GoalPlanner, LocalPlanner, RemotePlan, RemotePlanner,
};
use crate::models::GoalEstimate;
use crate::utils::{maybe_print_json, notify, pretty_table};

pub const RETRY_MESSAGE: &str =
    "Could not process your query. Include the amount and the term you want.";

pub fn handle(cfg: &Config, m: &clap::ArgMatches) -> Result<()> {
    if m.get_flag("examples") {
        let rows = EXAMPLE_QUERIES.iter().map(|q| vec![q.to_string()]).collect();
        println!("{}", pretty_table(&["Example queries"], rows));
        return Ok(());
    }
    let query = m
        .get_one::<String>("query")
        .map(|s| s.trim())
        .unwrap_or_default();
    if query.is_empty() {
        notify("Error", "Please enter your savings query.");
        return Ok(());
    }

    let planner = planner_for(cfg, m.get_flag("remote"), m.get_flag("local"))?;
    match planner.plan(query) {
        Ok(plan) => {
            if !maybe_print_json(m.get_flag("json"), m.get_flag("jsonl"), &plan)? {
                match &plan {
                    GoalPlan::Local(est) => print_estimate(est),
                    GoalPlan::Remote(remote) => print_remote(remote),
                }
            }
        }
        Err(err) => notify("Calculation error", failure_message(&err)),
    }
    Ok(())
}

pub fn planner_for(cfg: &Config, remote: bool, local: bool) -> Result<Box<dyn GoalPlanner>> {
    let use_remote = remote || (cfg.goal_mode == GoalMode::Remote && !local);
    if use_remote {
        let url = cfg
            .webhook_url
            .as_deref()
            .context("Remote goal mode requires webhook_url (config set webhook_url <url>)")?;
        Ok(Box::new(RemotePlanner::new(url)?))
    } else {
        Ok(Box::new(LocalPlanner::new()))
    }
}

/// "No result" and a failing service read the same to the user.
pub fn failure_message(err: &GoalError) -> &'static str {
    if err.is_retryable() {
        return RETRY_MESSAGE;
    }
    match err {
        GoalError::TermTooLong => "The term is too long. Try a shorter one.",
        _ => "The term must be at least one month.",
    }
}

fn print_estimate(est: &GoalEstimate) {
    println!(
        "{}",
        pretty_table(
            &["Required monthly saving", "Projected date", "Goal total"],
            vec![vec![
                format_currency(est.monthly_saving),
                format_long_date(est.target_date),
                format_currency(est.target_amount),
            ]],
        )
    );
    println!(
        "To reach {} in {} months.",
        format_currency(est.target_amount),
        est.term_months
    );
    print_recommendations(&est.recommendations);
    println!(
        "Tip: set up an automatic monthly transfer of {} to a separate savings account.",
        format_currency(est.monthly_saving)
    );
}

fn print_remote(plan: &RemotePlan) {
    println!(
        "{}",
        pretty_table(
            &["Required monthly saving", "Projected date"],
            vec![vec![
                format_currency(plan.monthly_saving),
                plan.projected_date.clone(),
            ]],
        )
    );
    print_recommendations(&plan.recommendation_lines());
}

fn print_recommendations(recs: &[String]) {
    if recs.is_empty() {
        return;
    }
    let rows = recs
        .iter()
        .enumerate()
        .map(|(i, r)| vec![(i + 1).to_string(), r.clone()])
        .collect();
    println!("{}", pretty_table(&["#", "Recommendation"], rows));
}
