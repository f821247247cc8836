//! Dispensed withdrawal result.

use atm_shared::{Currency, Money};
use serde::Serialize;

use crate::cash::BanknotesPack;

/// Banknotes handed out for one successful withdrawal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Withdrawal {
    currency: Currency,
    banknotes: Vec<BanknotesPack>,
}

impl Withdrawal {
    pub(crate) fn new(currency: Currency, banknotes: Vec<BanknotesPack>) -> Self {
        Self {
            currency,
            banknotes,
        }
    }

    /// Packs dispensed, largest denomination first.
    #[must_use]
    pub fn banknotes(&self) -> &[BanknotesPack] {
        &self.banknotes
    }

    /// Total value dispensed.
    #[must_use]
    pub fn total(&self) -> Money {
        let amount = self.banknotes.iter().map(BanknotesPack::value).sum();
        Money::new(amount, self.currency)
    }

    /// Number of physical notes dispensed.
    #[must_use]
    pub fn note_count(&self) -> u64 {
        self.banknotes.iter().map(|p| u64::from(p.count())).sum()
    }

    /// Consumes the withdrawal, returning its packs.
    #[must_use]
    pub fn into_banknotes(self) -> Vec<BanknotesPack> {
        self.banknotes
    }
}
