//! Error types for the query crate.

use thiserror::Error;

/// Errors that can occur while evaluating operators or executing queries.
#[derive(Debug, Error)]
pub enum QueryError {
    /// A `like` pattern failed to compile after wildcard translation.
    #[error("invalid like pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// Operator name that does not correspond to any [`Op`](crate::Op).
    #[error("unknown operator '{0}'")]
    UnknownOperator(String),

    /// Integer division or remainder with a zero divisor.
    #[error("integer division by zero in '{op}'")]
    DivisionByZero { op: &'static str },

    /// Integer arithmetic overflowed its type.
    #[error("integer overflow in '{op}'")]
    Overflow { op: &'static str },

    /// Error raised by a caller-supplied predicate or projection.
    #[error("query callback failed: {0}")]
    Callback(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl QueryError {
    /// Wraps a caller error so it can be returned from a fallible
    /// predicate or projection.
    ///
    /// The original error stays reachable through `source()` or by
    /// downcasting the boxed value.
    pub fn callback<E>(err: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        QueryError::Callback(err.into())
    }
}

/// Result type for query operations.
pub type Result<T> = std::result::Result<T, QueryError>;
