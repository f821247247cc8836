//! Withdrawal authorization and banknote dispensing.
//!
//! This crate contains pure decision logic with ZERO network or persistence
//! dependencies. The bank is reached through the [`bank::AuthorizationGateway`]
//! trait, which integration code implements.
//!
//! # Modules
//!
//! - `cash` - Banknote catalog and the machine's reserve
//! - `dispense` - Choosing notes for an amount
//! - `bank` - Card/PIN types and the authorization seam
//! - `atm` - The withdrawal controller
//!
//! # Example
//!
//! ```
//! use atm_core::atm::AtMachine;
//! use atm_core::bank::{Card, LocalBank, PinCode};
//! use atm_core::cash::{Banknote, BanknotesPack, Deposit};
//! use atm_shared::{Currency, Money};
//!
//! let card = Card::new("12341234");
//! let pin = PinCode::new(1, 2, 3, 4).unwrap();
//! let bank = LocalBank::new().with_account(&card, pin);
//!
//! let mut atm = AtMachine::new(bank, Currency::Pln);
//! atm.set_deposit(
//!     Deposit::new(
//!         Currency::Pln,
//!         [
//!             BanknotesPack::new(5, Banknote::PLN_100),
//!             BanknotesPack::new(5, Banknote::PLN_50),
//!         ],
//!     )
//!     .unwrap(),
//! )
//! .unwrap();
//!
//! let withdrawal = atm.withdraw(&pin, &card, Money::new(150, Currency::Pln)).unwrap();
//! assert_eq!(withdrawal.note_count(), 2);
//! ```

pub mod atm;
pub mod bank;
pub mod cash;
pub mod dispense;

pub use atm::{AtMachine, Withdrawal, WithdrawalError, WithdrawalErrorKind};
