//! The machine's cash reserve.

use std::collections::BTreeMap;

use atm_shared::{AtmConfig, Currency, Money};

use super::banknote::{Banknote, BanknotesPack};
use super::error::CashError;

/// Banknotes held by the machine, by denomination, in a single currency.
///
/// The currency is fixed at creation. Counts only change through
/// [`Deposit::apply_withdrawal`] and [`Deposit::refill`], and both either
/// apply fully or leave the reserve untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deposit {
    currency: Currency,
    notes: BTreeMap<Banknote, u32>,
}

impl Deposit {
    /// Creates an empty reserve.
    #[must_use]
    pub const fn empty(currency: Currency) -> Self {
        Self {
            currency,
            notes: BTreeMap::new(),
        }
    }

    /// Creates a reserve from packs, merging repeated denominations.
    ///
    /// # Errors
    ///
    /// Returns an error if a pack is in another currency or a merged count
    /// overflows.
    pub fn new(
        currency: Currency,
        packs: impl IntoIterator<Item = BanknotesPack>,
    ) -> Result<Self, CashError> {
        let mut deposit = Self::empty(currency);
        for pack in packs {
            deposit.refill(pack)?;
        }
        Ok(deposit)
    }

    /// Builds the reserve described by the `[deposit]` configuration section.
    ///
    /// # Errors
    ///
    /// Returns an error if a configured denomination does not exist for the
    /// currency, or if counts overflow.
    pub fn from_config(config: &AtmConfig) -> Result<Self, CashError> {
        let currency = config.deposit_currency();
        let packs = config
            .deposit
            .packs
            .iter()
            .map(|p| Banknote::new(p.denomination, currency).map(|b| BanknotesPack::new(p.count, b)))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(currency, packs)
    }

    /// Currency of every note in the reserve.
    #[must_use]
    pub const fn currency(&self) -> Currency {
        self.currency
    }

    /// Sum of `count * denomination` over the reserve.
    ///
    /// Saturates at `u64::MAX`, which no physical machine can hold.
    #[must_use]
    pub fn total_value(&self) -> Money {
        let amount = self
            .packs()
            .fold(0u64, |acc, pack| acc.saturating_add(pack.value()));
        Money::new(amount, self.currency)
    }

    /// Notes held of one denomination; 0 if absent.
    #[must_use]
    pub fn available_count(&self, banknote: Banknote) -> u32 {
        self.notes.get(&banknote).copied().unwrap_or(0)
    }

    /// Total number of notes held.
    #[must_use]
    pub fn note_count(&self) -> u64 {
        self.notes.values().map(|&c| u64::from(c)).sum()
    }

    /// Returns true if the reserve holds no notes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.notes.values().all(|&c| c == 0)
    }

    /// Non-empty packs, largest denomination first.
    pub fn packs(&self) -> impl Iterator<Item = BanknotesPack> + '_ {
        self.notes
            .iter()
            .rev()
            .filter(|(_, count)| **count > 0)
            .map(|(&banknote, &count)| BanknotesPack::new(count, banknote))
    }

    /// Removes the dispensed notes from the reserve.
    ///
    /// Every pack is checked before any count changes, so on error the
    /// reserve is exactly as before.
    ///
    /// # Errors
    ///
    /// Returns `CashError::InsufficientNotes` if a count would go negative and
    /// `CashError::CurrencyMismatch` for a pack in another currency.
    pub fn apply_withdrawal(&mut self, breakdown: &[BanknotesPack]) -> Result<(), CashError> {
        let mut requested: BTreeMap<Banknote, u32> = BTreeMap::new();
        for pack in breakdown {
            self.ensure_currency(pack.banknote())?;
            let entry = requested.entry(pack.banknote()).or_insert(0);
            *entry = entry
                .checked_add(pack.count())
                .ok_or(CashError::CountOverflow(pack.banknote()))?;
        }

        for (&banknote, &count) in &requested {
            let available = self.available_count(banknote);
            if count > available {
                return Err(CashError::InsufficientNotes {
                    banknote,
                    requested: count,
                    available,
                });
            }
        }

        for (banknote, count) in requested {
            if let Some(held) = self.notes.get_mut(&banknote) {
                *held -= count;
            }
        }
        Ok(())
    }

    /// Adds notes to the reserve.
    ///
    /// # Errors
    ///
    /// Returns an error if the pack is in another currency or the count
    /// would overflow.
    pub fn refill(&mut self, pack: BanknotesPack) -> Result<(), CashError> {
        self.ensure_currency(pack.banknote())?;
        if pack.count() == 0 {
            return Ok(());
        }
        let held = self.available_count(pack.banknote());
        let updated = held
            .checked_add(pack.count())
            .ok_or(CashError::CountOverflow(pack.banknote()))?;
        self.notes.insert(pack.banknote(), updated);
        Ok(())
    }

    fn ensure_currency(&self, banknote: Banknote) -> Result<(), CashError> {
        if banknote.currency() == self.currency {
            Ok(())
        } else {
            Err(CashError::CurrencyMismatch {
                expected: self.currency,
                actual: banknote.currency(),
            })
        }
    }
}
