// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use thiserror::Error;

/// Data-entry failures; the input is kept so the user can correct it.
#[derive(Debug, Error, PartialEq)]
pub enum FormError {
    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
    #[error("Invalid amount '{0}', expected a positive number up to 1.000.000.000.000.000")]
    InvalidAmount(String),
    #[error("Invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),
    #[error("Invalid kind '{0}', expected income or expense")]
    InvalidKind(String),
}

#[derive(Debug, Error)]
pub enum GoalError {
    #[error("could not find a target amount in the query")]
    NotRecognized,
    #[error("the savings term must be at least one month")]
    ZeroTerm,
    #[error("the savings term reaches past the last representable date")]
    TermTooLong,
    #[error("goal service failed: {0}")]
    Service(String),
}

impl GoalError {
    /// Unrecognized queries and service failures get the same retry prompt.
    pub fn is_retryable(&self) -> bool {
        matches!(self, GoalError::NotRecognized | GoalError::Service(_))
    }
}
