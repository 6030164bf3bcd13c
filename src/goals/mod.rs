// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Savings-goal planners. The local planner reads the query itself; the
//! remote one hands it to a webhook. Their results have different shapes.

pub mod local;
pub mod remote;

use serde::Serialize;

use crate::error::GoalError;
use crate::models::GoalEstimate;

pub use local::{LocalPlanner, estimate};
pub use remote::{RemotePlan, RemotePlanner, render_recommendations};

pub const EXAMPLE_QUERIES: &[&str] = &[
    "Quiero ahorrar 50 millones para comprar una casa en 3 años",
    "Necesito 20 millones para un carro en 18 meses",
    "Quiero ahorrar 5 millones para vacaciones en 8 meses",
    "Meta: 100 millones para inversión en 5 años",
];

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "source", rename_all = "lowercase")]
pub enum GoalPlan {
    Local(GoalEstimate),
    Remote(RemotePlan),
}

pub trait GoalPlanner {
    fn plan(&self, query: &str) -> Result<GoalPlan, GoalError>;
}
