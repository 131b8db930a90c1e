//! Error types for statistical operations.

use std::fmt;

/// Result type for statistics operations.
pub type StatsResult<T> = Result<T, StatsError>;

/// Errors that can occur during statistical operations.
///
/// Failures propagate unchanged to the caller: there is no retry, no
/// default substitution, and no partial result. A computation either
/// fully succeeds or fails atomically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatsError {
    /// A precision context was requested with zero significant digits.
    InvalidPrecision,

    /// Input data is empty when non-empty data is required.
    EmptyData { context: String },

    /// A quotient had a zero divisor.
    DivisionByZero,

    /// A square root was taken of a negative value.
    NegativeSquareRoot,
}

impl fmt::Display for StatsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPrecision => {
                write!(f, "precision must be at least one significant digit")
            }
            Self::EmptyData { context } => {
                write!(f, "empty data in {}", context)
            }
            Self::DivisionByZero => {
                write!(f, "division by zero")
            }
            Self::NegativeSquareRoot => {
                write!(f, "square root of a negative value")
            }
        }
    }
}

impl std::error::Error for StatsError {}
