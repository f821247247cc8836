//! Dispensing error types.

use atm_shared::{Currency, Money};
use thiserror::Error;

/// Reasons the selector cannot produce a breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispenseError {
    /// Requested amount is in another currency than the reserve.
    #[error("Currency mismatch: reserve holds {expected}, requested {actual}")]
    CurrencyMismatch {
        /// Currency of the reserve.
        expected: Currency,
        /// Currency of the request.
        actual: Currency,
    },

    /// Nothing to dispense.
    #[error("Requested amount must be positive")]
    ZeroAmount,

    /// The reserve holds less than requested.
    #[error("Requested {requested} exceeds reserve of {available}")]
    ExceedsReserve {
        /// Amount requested.
        requested: Money,
        /// Total value held.
        available: Money,
    },

    /// No exact breakdown was found with the notes available.
    #[error("Cannot dispense {amount} with available banknotes")]
    Unrepresentable {
        /// Amount requested.
        amount: Money,
    },

    /// The exact search would need too large a table.
    #[error("Amount {amount} is too large for exact search (limit {limit} units)")]
    SearchLimitExceeded {
        /// Amount requested.
        amount: Money,
        /// Largest number of smallest-unit steps searched.
        limit: u64,
    },
}
