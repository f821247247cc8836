//! Banknote catalog and packs of notes.

use atm_shared::{Currency, Money};
use serde::Serialize;

use super::error::CashError;

const PLN_LADDER: &[u32] = &[10, 20, 50, 100, 200, 500];
const EUR_LADDER: &[u32] = &[5, 10, 20, 50, 100, 200, 500];
const USD_LADDER: &[u32] = &[1, 2, 5, 10, 20, 50, 100];

/// A banknote denomination valid for a currency.
///
/// Only values on the currency's fixed ladder can be constructed, so a
/// `Banknote` in hand is always a real note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Banknote {
    value: u32,
    currency: Currency,
}

impl Banknote {
    /// 10 PLN
    pub const PLN_10: Self = Self::known(10, Currency::Pln);
    /// 20 PLN
    pub const PLN_20: Self = Self::known(20, Currency::Pln);
    /// 50 PLN
    pub const PLN_50: Self = Self::known(50, Currency::Pln);
    /// 100 PLN
    pub const PLN_100: Self = Self::known(100, Currency::Pln);
    /// 200 PLN
    pub const PLN_200: Self = Self::known(200, Currency::Pln);
    /// 500 PLN
    pub const PLN_500: Self = Self::known(500, Currency::Pln);

    /// 5 EUR
    pub const EUR_5: Self = Self::known(5, Currency::Eur);
    /// 10 EUR
    pub const EUR_10: Self = Self::known(10, Currency::Eur);
    /// 20 EUR
    pub const EUR_20: Self = Self::known(20, Currency::Eur);
    /// 50 EUR
    pub const EUR_50: Self = Self::known(50, Currency::Eur);
    /// 100 EUR
    pub const EUR_100: Self = Self::known(100, Currency::Eur);
    /// 200 EUR
    pub const EUR_200: Self = Self::known(200, Currency::Eur);
    /// 500 EUR
    pub const EUR_500: Self = Self::known(500, Currency::Eur);

    /// 1 USD
    pub const USD_1: Self = Self::known(1, Currency::Usd);
    /// 2 USD
    pub const USD_2: Self = Self::known(2, Currency::Usd);
    /// 5 USD
    pub const USD_5: Self = Self::known(5, Currency::Usd);
    /// 10 USD
    pub const USD_10: Self = Self::known(10, Currency::Usd);
    /// 20 USD
    pub const USD_20: Self = Self::known(20, Currency::Usd);
    /// 50 USD
    pub const USD_50: Self = Self::known(50, Currency::Usd);
    /// 100 USD
    pub const USD_100: Self = Self::known(100, Currency::Usd);

    const fn known(value: u32, currency: Currency) -> Self {
        Self { value, currency }
    }

    /// Creates a banknote, checking the value against the currency's ladder.
    ///
    /// # Errors
    ///
    /// Returns `CashError::UnknownDenomination` if no such note exists.
    pub fn new(value: u32, currency: Currency) -> Result<Self, CashError> {
        if Self::denominations(currency).contains(&value) {
            Ok(Self { value, currency })
        } else {
            Err(CashError::UnknownDenomination { value, currency })
        }
    }

    /// Valid face values for a currency, ascending.
    #[must_use]
    pub const fn denominations(currency: Currency) -> &'static [u32] {
        match currency {
            Currency::Pln => PLN_LADDER,
            Currency::Eur => EUR_LADDER,
            Currency::Usd => USD_LADDER,
        }
    }

    /// All notes of a currency, ascending by value.
    pub fn catalog(currency: Currency) -> impl DoubleEndedIterator<Item = Self> {
        Self::denominations(currency)
            .iter()
            .map(move |&value| Self { value, currency })
    }

    /// Face value in whole currency units.
    #[must_use]
    pub const fn value(&self) -> u32 {
        self.value
    }

    /// Currency of the note.
    #[must_use]
    pub const fn currency(&self) -> Currency {
        self.currency
    }

    /// Face value as money.
    #[must_use]
    pub fn as_money(&self) -> Money {
        Money::new(u64::from(self.value), self.currency)
    }
}

impl std::fmt::Display for Banknote {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.value, self.currency)
    }
}

/// `count` notes of one denomination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct BanknotesPack {
    count: u32,
    banknote: Banknote,
}

impl BanknotesPack {
    /// Creates a pack.
    #[must_use]
    pub const fn new(count: u32, banknote: Banknote) -> Self {
        Self { count, banknote }
    }

    /// Number of notes.
    #[must_use]
    pub const fn count(&self) -> u32 {
        self.count
    }

    /// Denomination of every note in the pack.
    #[must_use]
    pub const fn banknote(&self) -> Banknote {
        self.banknote
    }

    /// Total face value, `count * denomination`.
    #[must_use]
    pub fn value(&self) -> u64 {
        u64::from(self.count) * u64::from(self.banknote.value)
    }
}

impl std::fmt::Display for BanknotesPack {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.count, self.banknote)
    }
}
