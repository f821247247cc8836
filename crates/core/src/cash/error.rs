//! Cash reserve error types.

use atm_shared::Currency;
use thiserror::Error;

use super::banknote::Banknote;

/// Errors that can occur while building or mutating a cash reserve.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CashError {
    /// The value is not a banknote of the currency.
    #[error("No {value} banknote exists for {currency}")]
    UnknownDenomination {
        /// Requested face value.
        value: u32,
        /// Currency the note was requested in.
        currency: Currency,
    },

    /// A pack does not share the reserve's currency.
    #[error("Currency mismatch: reserve holds {expected}, got {actual}")]
    CurrencyMismatch {
        /// Currency of the reserve.
        expected: Currency,
        /// Currency that was offered.
        actual: Currency,
    },

    /// Removing notes would drive a count below zero.
    #[error("Insufficient {banknote} notes: requested {requested}, available {available}")]
    InsufficientNotes {
        /// Denomination concerned.
        banknote: Banknote,
        /// Number of notes requested.
        requested: u32,
        /// Number of notes held.
        available: u32,
    },

    /// Adding notes would exceed the counter capacity.
    #[error("Note count overflow for {0}")]
    CountOverflow(Banknote),
}
