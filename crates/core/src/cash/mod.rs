//! Cash reserve modelling.
//!
//! This module provides:
//! - The fixed banknote catalog per currency
//! - Packs of notes of one denomination
//! - The machine's deposit and its all-or-nothing mutations

pub mod banknote;
pub mod deposit;
pub mod error;

pub use banknote::{Banknote, BanknotesPack};
pub use deposit::Deposit;
pub use error::CashError;
