//! Bank-facing types and the authorization seam.
//!
//! This module provides:
//! - Card and PIN value types
//! - The `AuthorizationGateway` trait consumed by the machine
//! - An in-memory `LocalBank` gateway

pub mod credentials;
pub mod error;
pub mod gateway;
pub mod local;

pub use credentials::{Card, PinCode};
pub use error::{AuthorizationError, PinError};
#[cfg(test)]
pub use gateway::MockAuthorizationGateway;
pub use gateway::{AuthorizationGateway, AuthorizationToken};
pub use local::LocalBank;
