//! Bank-side error types.

use thiserror::Error;

/// Errors returned by an authorization gateway.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthorizationError {
    /// The bank rejected the PIN/card pair.
    #[error("Authorization rejected")]
    Rejected,

    /// The bank could not be reached or did not answer.
    #[error("Authorization service unavailable: {0}")]
    Unavailable(String),
}

/// Errors building a [`PinCode`](super::PinCode).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PinError {
    /// Not exactly four digits.
    #[error("PIN must have exactly 4 digits, got {0}")]
    InvalidLength(usize),

    /// A digit is outside 0-9.
    #[error("PIN digit {digit} at position {position} is out of range")]
    DigitOutOfRange {
        /// Zero-based position of the digit.
        position: usize,
        /// Offending value.
        digit: u8,
    },

    /// A character is not a decimal digit.
    #[error("PIN contains non-digit character {0:?}")]
    NotADigit(char),
}
