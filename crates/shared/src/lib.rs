//! Shared types, errors, and configuration for the ATM core.
//!
//! This crate provides common types used across all other crates:
//! - Money and currency value types
//! - Application-wide error taxonomy
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use crate::config::{AtmConfig, DepositConfig, MachineConfig, PackConfig, SelectionStrategy};
pub use error::{AppError, AppResult};
pub use types::{Currency, Money, MoneyError};
