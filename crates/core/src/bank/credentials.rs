//! Card and PIN value types.

use std::str::FromStr;

use super::error::PinError;

const PIN_LENGTH: usize = 4;

/// A four-digit PIN.
///
/// Immutable once built. `Debug` and `Display` never reveal the digits.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct PinCode {
    digits: [u8; PIN_LENGTH],
}

impl PinCode {
    /// Creates a PIN from four digits.
    ///
    /// # Errors
    ///
    /// Returns `PinError::DigitOutOfRange` if any digit is above 9.
    pub fn new(d1: u8, d2: u8, d3: u8, d4: u8) -> Result<Self, PinError> {
        Self::from_digits(&[d1, d2, d3, d4])
    }

    /// Creates a PIN from a digit slice, which must hold exactly four digits.
    ///
    /// # Errors
    ///
    /// Returns `PinError::InvalidLength` or `PinError::DigitOutOfRange`.
    pub fn from_digits(digits: &[u8]) -> Result<Self, PinError> {
        let digits: [u8; PIN_LENGTH] = digits
            .try_into()
            .map_err(|_| PinError::InvalidLength(digits.len()))?;

        if let Some(position) = digits.iter().position(|&d| d > 9) {
            return Err(PinError::DigitOutOfRange {
                position,
                digit: digits[position],
            });
        }

        Ok(Self { digits })
    }

    /// The PIN digits, in entry order.
    #[must_use]
    pub const fn digits(&self) -> [u8; PIN_LENGTH] {
        self.digits
    }
}

impl FromStr for PinCode {
    type Err = PinError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .chars()
            .map(|c| {
                c.to_digit(10)
                    .and_then(|d| u8::try_from(d).ok())
                    .ok_or(PinError::NotADigit(c))
            })
            .collect::<Result<Vec<u8>, _>>()?;
        Self::from_digits(&digits)
    }
}

impl std::fmt::Debug for PinCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("PinCode(****)")
    }
}

impl std::fmt::Display for PinCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("****")
    }
}

/// A payment card, identified by its number.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Card {
    number: String,
}

impl Card {
    /// Creates a card.
    pub fn new(number: impl Into<String>) -> Self {
        Self {
            number: number.into(),
        }
    }

    /// The card number, passed through to the bank unchanged.
    #[must_use]
    pub fn number(&self) -> &str {
        &self.number
    }
}
