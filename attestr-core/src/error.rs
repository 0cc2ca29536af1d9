//! Error types for attestr-core

use thiserror::Error;

/// Result type alias for outcome-encoding operations
pub type Result<T> = std::result::Result<T, OutcomeError>;

/// Error types for numeric-outcome encoding operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OutcomeError {
    /// Value needs more digits than the declared width
    #[error("value {value} does not fit in {nb_digits} base-{base} digits")]
    Overflow {
        /// The outcome value that failed to decompose
        value: u64,
        /// Numeral base of the digit vector
        base: u64,
        /// Declared digit width
        nb_digits: usize,
    },

    /// Outcome domain `base^nb_nonces` exceeds the value space
    #[error("domain {base}^{nb_nonces} does not fit in 64 bits")]
    DomainOverflow {
        /// Numeral base of the outcome domain
        base: u64,
        /// Number of oracle nonces (one per digit)
        nb_nonces: usize,
    },

    /// Range bounds out of order
    #[error("invalid range: start {start} is greater than end {end}")]
    InvalidRange {
        /// Lower bound of the requested range
        start: u64,
        /// Upper bound of the requested range
        end: u64,
    },

    /// Range with no values in it
    #[error("range starting at {start} has zero count")]
    ZeroCount {
        /// Start of the offending range
        start: u64,
    },

    /// Numeral base too small to carry information
    #[error("base must be at least 2, got {0}")]
    InvalidBase(u64),

    /// String digit that does not parse or is out of the digit alphabet
    #[error("invalid digit: {0}")]
    InvalidDigit(String),

    /// Outcome list with no ranges in it
    #[error("outcome list is empty")]
    EmptyOutcomes,
}
