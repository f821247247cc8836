//! Denomination selection.

pub mod error;
pub mod selector;

#[cfg(test)]
mod selector_props;

pub use atm_shared::SelectionStrategy;
pub use error::DispenseError;
pub use selector::{DenominationSelector, MAX_SEARCH_CELLS};
