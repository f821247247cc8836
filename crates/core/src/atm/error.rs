//! Withdrawal error types.
//!
//! Every failed withdrawal reports one of four kinds. The first three are
//! ordinary outcomes the caller can present to the card holder. Internal
//! consistency means the selector and the reserve disagreed, which is a bug.

use atm_shared::{AppError, Currency};
use thiserror::Error;

use crate::bank::AuthorizationError;
use crate::cash::CashError;
use crate::dispense::DispenseError;

/// Errors that can occur during a withdrawal.
#[derive(Debug, Error)]
pub enum WithdrawalError {
    // ========== Invalid Request ==========
    /// Requested currency differs from the machine's.
    #[error("Machine dispenses {expected}, requested {actual}")]
    CurrencyMismatch {
        /// The machine's currency.
        expected: Currency,
        /// The requested currency.
        actual: Currency,
    },

    /// Requested amount is zero.
    #[error("Withdrawal amount must be positive")]
    ZeroAmount,

    // ========== Authorization ==========
    /// The bank rejected the PIN/card pair.
    #[error("Authorization denied")]
    AuthorizationDenied(#[source] AuthorizationError),

    // ========== Dispensing ==========
    /// The reserve cannot produce the exact amount.
    #[error("Unable to dispense: {0}")]
    UnableToDispense(#[source] DispenseError),

    // ========== Fatal ==========
    /// Committing the breakdown failed. The reserve is unchanged.
    #[error("Internal consistency failure: {0}")]
    InternalConsistency(#[source] CashError),
}

/// Coarse classification of [`WithdrawalError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WithdrawalErrorKind {
    /// Bad currency or amount; fix the request.
    InvalidRequest,
    /// The bank said no.
    AuthorizationDenied,
    /// Notes are not available for that amount.
    UnableToDispense,
    /// Selector and reserve disagree.
    InternalConsistency,
}

impl WithdrawalError {
    /// Returns the kind of failure.
    #[must_use]
    pub const fn kind(&self) -> WithdrawalErrorKind {
        match self {
            Self::CurrencyMismatch { .. } | Self::ZeroAmount => WithdrawalErrorKind::InvalidRequest,
            Self::AuthorizationDenied(_) => WithdrawalErrorKind::AuthorizationDenied,
            Self::UnableToDispense(_) => WithdrawalErrorKind::UnableToDispense,
            Self::InternalConsistency(_) => WithdrawalErrorKind::InternalConsistency,
        }
    }

    /// Returns true for failures that indicate a bug.
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::InternalConsistency(_))
    }
}

impl From<WithdrawalError> for AppError {
    fn from(err: WithdrawalError) -> Self {
        let message = err.to_string();
        match err.kind() {
            WithdrawalErrorKind::InvalidRequest => Self::Validation(message),
            WithdrawalErrorKind::AuthorizationDenied => Self::Unauthorized(message),
            WithdrawalErrorKind::UnableToDispense => Self::BusinessRule(message),
            WithdrawalErrorKind::InternalConsistency => Self::Internal(message),
        }
    }
}
