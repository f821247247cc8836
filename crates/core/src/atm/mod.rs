//! Withdrawal orchestration.
//!
//! This module ties the pieces together:
//! - Request validation
//! - Bank authorization
//! - Banknote selection and commit against the reserve

pub mod error;
pub mod machine;
pub mod withdrawal;


pub use error::{WithdrawalError, WithdrawalErrorKind};
pub use machine::AtMachine;
pub use withdrawal::Withdrawal;
