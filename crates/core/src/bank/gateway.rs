//! Authorization gateway seam.
//!
//! The bank is an external collaborator. Integration code provides the real
//! implementation (network client, HSM, ...); this crate consumes it through
//! [`AuthorizationGateway`] only.

use std::sync::Arc;

use super::credentials::PinCode;
use super::error::AuthorizationError;

/// Opaque proof that the bank accepted a PIN/card pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AuthorizationToken(String);

impl AuthorizationToken {
    /// Wraps a bank-issued token.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// The raw token, for forwarding back to the bank.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Capability to authorize a card holder with the bank.
///
/// One synchronous call per withdrawal. Timeouts and retries belong to the
/// implementation, not to the caller.
#[cfg_attr(test, mockall::automock)]
pub trait AuthorizationGateway {
    /// Authorize `pin` for `card_number`.
    fn authorize(
        &self,
        pin: &PinCode,
        card_number: &str,
    ) -> Result<AuthorizationToken, AuthorizationError>;
}

impl<G: AuthorizationGateway + ?Sized> AuthorizationGateway for &G {
    fn authorize(
        &self,
        pin: &PinCode,
        card_number: &str,
    ) -> Result<AuthorizationToken, AuthorizationError> {
        (**self).authorize(pin, card_number)
    }
}

impl<G: AuthorizationGateway + ?Sized> AuthorizationGateway for Box<G> {
    fn authorize(
        &self,
        pin: &PinCode,
        card_number: &str,
    ) -> Result<AuthorizationToken, AuthorizationError> {
        (**self).authorize(pin, card_number)
    }
}

impl<G: AuthorizationGateway + ?Sized> AuthorizationGateway for Arc<G> {
    fn authorize(
        &self,
        pin: &PinCode,
        card_number: &str,
    ) -> Result<AuthorizationToken, AuthorizationError> {
        (**self).authorize(pin, card_number)
    }
}
