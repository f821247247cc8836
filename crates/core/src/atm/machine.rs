//! The ATM controller.
//!
//! A withdrawal runs through five steps:
//! 1. Validate currency and amount (no external calls)
//! 2. Authorize the PIN/card pair with the bank
//! 3. Select banknotes from a snapshot of the reserve
//! 4. Commit the breakdown to the reserve
//! 5. Return the dispensed notes
//!
//! Only step 4 mutates state. Any failure before it leaves the reserve
//! exactly as it was. `withdraw` takes `&mut self`, so there is never more
//! than one withdrawal in flight against a machine.

use atm_shared::{AtmConfig, Currency, Money, SelectionStrategy};
use tracing::{debug, error, info, warn};

use super::error::WithdrawalError;
use super::withdrawal::Withdrawal;
use crate::bank::{AuthorizationGateway, Card, PinCode};
use crate::cash::{BanknotesPack, CashError, Deposit};
use crate::dispense::DenominationSelector;

/// An automated teller machine dispensing a single currency.
#[derive(Debug)]
pub struct AtMachine<G: AuthorizationGateway> {
    bank: G,
    currency: Currency,
    strategy: SelectionStrategy,
    deposit: Deposit,
}

impl<G: AuthorizationGateway> AtMachine<G> {
    /// Creates a machine with an empty reserve and greedy selection.
    pub fn new(bank: G, currency: Currency) -> Self {
        Self {
            bank,
            currency,
            strategy: SelectionStrategy::default(),
            deposit: Deposit::empty(currency),
        }
    }

    /// Creates a machine from configuration, loading the initial reserve.
    ///
    /// # Errors
    ///
    /// Returns `CashError` if the configured reserve is invalid or not in the
    /// machine's currency.
    pub fn from_config(bank: G, config: &AtmConfig) -> Result<Self, CashError> {
        let mut machine = Self::new(bank, config.machine.currency).with_strategy(config.machine.strategy);
        machine.set_deposit(Deposit::from_config(config)?)?;
        Ok(machine)
    }

    /// Sets the selection strategy.
    #[must_use]
    pub fn with_strategy(mut self, strategy: SelectionStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Replaces the reserve, e.g. after a cassette swap.
    ///
    /// # Errors
    ///
    /// Returns `CashError::CurrencyMismatch` if the reserve is in another
    /// currency; the current reserve is kept.
    pub fn set_deposit(&mut self, deposit: Deposit) -> Result<(), CashError> {
        if deposit.currency() != self.currency {
            return Err(CashError::CurrencyMismatch {
                expected: self.currency,
                actual: deposit.currency(),
            });
        }
        info!(
            currency = %self.currency,
            total = deposit.total_value().amount,
            notes = deposit.note_count(),
            "Reserve loaded"
        );
        self.deposit = deposit;
        Ok(())
    }

    /// Adds notes to the current reserve.
    ///
    /// # Errors
    ///
    /// Returns `CashError` on currency mismatch or count overflow.
    pub fn refill(&mut self, pack: BanknotesPack) -> Result<(), CashError> {
        self.deposit.refill(pack)?;
        debug!(pack = %pack, "Reserve refilled");
        Ok(())
    }

    /// The current reserve.
    #[must_use]
    pub const fn deposit(&self) -> &Deposit {
        &self.deposit
    }

    /// The machine's currency.
    #[must_use]
    pub const fn currency(&self) -> Currency {
        self.currency
    }

    /// The selection strategy in use.
    #[must_use]
    pub const fn strategy(&self) -> SelectionStrategy {
        self.strategy
    }

    /// Withdraw `amount` for the card holder.
    ///
    /// # Errors
    ///
    /// Returns `WithdrawalError` if the request is invalid, the bank denies
    /// it, or the reserve cannot produce the exact amount. In every error
    /// case the reserve is unchanged.
    pub fn withdraw(
        &mut self,
        pin: &PinCode,
        card: &Card,
        amount: Money,
    ) -> Result<Withdrawal, WithdrawalError> {
        self.validate(amount)?;

        debug!(amount = %amount, "Authorizing withdrawal");
        let _token = self.bank.authorize(pin, card.number()).map_err(|e| {
            warn!(error = %e, "Withdrawal authorization denied");
            WithdrawalError::AuthorizationDenied(e)
        })?;

        debug!(amount = %amount, strategy = ?self.strategy, "Selecting banknotes");
        let breakdown =
            DenominationSelector::select(amount, &self.deposit, self.strategy).map_err(|e| {
                warn!(error = %e, "Unable to dispense");
                WithdrawalError::UnableToDispense(e)
            })?;

        self.deposit.apply_withdrawal(&breakdown).map_err(|e| {
            error!(error = %e, "Breakdown rejected by reserve");
            WithdrawalError::InternalConsistency(e)
        })?;

        let withdrawal = Withdrawal::new(self.currency, breakdown);
        info!(
            amount = %amount,
            notes = withdrawal.note_count(),
            remaining = self.deposit.total_value().amount,
            "Withdrawal dispensed"
        );
        Ok(withdrawal)
    }

    fn validate(&self, amount: Money) -> Result<(), WithdrawalError> {
        if amount.currency != self.currency {
            return Err(WithdrawalError::CurrencyMismatch {
                expected: self.currency,
                actual: amount.currency,
            });
        }
        if amount.is_zero() {
            return Err(WithdrawalError::ZeroAmount);
        }
        Ok(())
    }
}
