//! Crate error type.

use thiserror::Error;

/// Errors raised when inputs violate a contract or the harness cannot do I/O.
///
/// Search algorithms never return these: they build their own permutations
/// and only ever see valid input.
#[derive(Debug, Error)]
pub enum CvrpError {
    /// A permutation does not contain exactly `dimension - 1` customers.
    #[error("permutation has {actual} customers, problem expects {expected}")]
    DimensionMismatch {
        /// Number of customers in the problem.
        expected: usize,
        /// Length of the permutation supplied.
        actual: usize,
    },

    /// A permutation names the depot or an id that is not in the problem.
    #[error("id {0} is not a customer of this problem")]
    UnknownCustomer(usize),

    /// A permutation names the same customer more than once.
    #[error("customer {0} appears more than once in the permutation")]
    DuplicateCustomer(usize),

    /// The problem description is inconsistent.
    #[error("invalid problem: {0}")]
    InvalidProblem(String),

    /// An instance file could not be parsed.
    #[error("parse error at line {line}: {message}")]
    Parse {
        /// 1-based line number.
        line: usize,
        /// What went wrong.
        message: String,
    },

    /// A configuration value is malformed.
    #[error("config key '{key}': {message}")]
    Config {
        /// Offending key.
        key: String,
        /// What went wrong.
        message: String,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl CvrpError {
    pub(crate) fn config(key: &str, message: impl Into<String>) -> Self {
        Self::Config {
            key: key.to_string(),
            message: message.into(),
        }
    }
}
