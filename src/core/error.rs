//! Errors raised by the analytics core.

use thiserror::Error;

/// Raised only for mathematically undefined operations.
///
/// Every other input, however extreme, produces a finite number. Callers get
/// this value back instead of a `NaN` or an infinity.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    #[error("initial value must be positive, got {0}")]
    NonPositiveInitial(f64),

    #[error("final value must not be negative, got {0}")]
    NegativeFinal(f64),

    #[error("duration must be positive, got {0} years")]
    NonPositiveDuration(f64),

    #[error("{0} must be a finite number")]
    NonFinite(&'static str),

    #[error("gain percentage is undefined when nothing has been invested")]
    NothingInvested,
}
