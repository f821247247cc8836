//! In-memory bank for local integration and testing.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use tracing::debug;

use super::credentials::{Card, PinCode};
use super::error::AuthorizationError;
use super::gateway::{AuthorizationGateway, AuthorizationToken};

/// Gateway backed by a fixed table of card numbers and PINs.
#[derive(Debug, Default)]
pub struct LocalBank {
    accounts: HashMap<String, PinCode>,
    issued: AtomicU64,
}

impl LocalBank {
    /// Creates a bank with no accounts.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a card, replacing any previous PIN.
    #[must_use]
    pub fn with_account(mut self, card: &Card, pin: PinCode) -> Self {
        self.register(card, pin);
        self
    }

    /// Registers a card, replacing any previous PIN.
    pub fn register(&mut self, card: &Card, pin: PinCode) {
        self.accounts.insert(card.number().to_owned(), pin);
    }

    /// Number of tokens issued so far.
    #[must_use]
    pub fn tokens_issued(&self) -> u64 {
        self.issued.load(Ordering::Relaxed)
    }
}

impl AuthorizationGateway for LocalBank {
    fn authorize(
        &self,
        pin: &PinCode,
        card_number: &str,
    ) -> Result<AuthorizationToken, AuthorizationError> {
        match self.accounts.get(card_number) {
            Some(expected) if expected == pin => {
                let serial = self.issued.fetch_add(1, Ordering::Relaxed) + 1;
                debug!(serial, "Local authorization granted");
                Ok(AuthorizationToken::new(format!("local-{serial}")))
            }
            _ => Err(AuthorizationError::Rejected),
        }
    }
}
