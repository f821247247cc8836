//! Banknote selection for a requested amount.
//!
//! Two strategies are offered:
//!
//! - **Greedy**: walk denominations from largest to smallest and take
//!   `min(available, remaining / denomination)` notes of each. This is exact
//!   and minimal for the built-in ladders when supply is unlimited, but can
//!   miss a breakdown when counts run low (60 from `1x50 + 3x20`).
//! - **Fewest notes**: bounded change-making over the reserve. Finds the
//!   breakdown with the fewest notes whenever any exact one exists.
//!
//! The selector never mutates the reserve. The controller commits the
//! returned breakdown separately.

use std::collections::VecDeque;

use atm_shared::{Money, SelectionStrategy};

use super::error::DispenseError;
use crate::cash::{BanknotesPack, Deposit};

/// Largest number of smallest-unit cells the exact search will allocate.
pub const MAX_SEARCH_CELLS: u64 = 100_000;

const UNREACHABLE: u64 = u64::MAX;

/// Chooses banknotes for a withdrawal.
///
/// Pure logic over a reserve snapshot.
pub struct DenominationSelector;

impl DenominationSelector {
    /// Select banknotes that sum exactly to `amount`.
    ///
    /// The result is ordered by descending denomination, contains no empty
    /// packs, and never takes more notes of a denomination than `deposit`
    /// holds.
    ///
    /// # Errors
    ///
    /// Returns `DispenseError` if the amount is zero, in another currency,
    /// larger than the reserve, or not representable with available notes.
    pub fn select(
        amount: Money,
        deposit: &Deposit,
        strategy: SelectionStrategy,
    ) -> Result<Vec<BanknotesPack>, DispenseError> {
        Self::check_request(amount, deposit)?;

        match strategy {
            SelectionStrategy::Greedy => {
                Self::greedy(amount.amount, deposit).ok_or(DispenseError::Unrepresentable { amount })
            }
            SelectionStrategy::FewestNotes => Self::fewest_notes(amount, deposit),
        }
    }

    fn check_request(amount: Money, deposit: &Deposit) -> Result<(), DispenseError> {
        if amount.currency != deposit.currency() {
            return Err(DispenseError::CurrencyMismatch {
                expected: deposit.currency(),
                actual: amount.currency,
            });
        }
        if amount.is_zero() {
            return Err(DispenseError::ZeroAmount);
        }
        let available = deposit.total_value();
        if amount.amount > available.amount {
            return Err(DispenseError::ExceedsReserve {
                requested: amount,
                available,
            });
        }
        Ok(())
    }

    /// Largest-denomination-first walk over the reserve.
    ///
    /// Returns `None` if the walk ends with a remainder.
    #[must_use]
    pub fn greedy(target: u64, deposit: &Deposit) -> Option<Vec<BanknotesPack>> {
        let mut remaining = target;
        let mut breakdown = Vec::new();

        for pack in deposit.packs() {
            if remaining == 0 {
                break;
            }
            let value = u64::from(pack.banknote().value());
            let wanted = u32::try_from(remaining / value).unwrap_or(u32::MAX);
            let take = wanted.min(pack.count());
            if take > 0 {
                breakdown.push(BanknotesPack::new(take, pack.banknote()));
                remaining -= u64::from(take) * value;
            }
        }

        (remaining == 0).then_some(breakdown)
    }

    /// Exact bounded search minimising the number of notes.
    ///
    /// Works in multiples of the gcd of the held denominations. Each
    /// denomination is folded in with a sliding-window minimum per residue
    /// class, so the cost is `O(denominations * cells)`.
    fn fewest_notes(amount: Money, deposit: &Deposit) -> Result<Vec<BanknotesPack>, DispenseError> {
        let unrepresentable = DispenseError::Unrepresentable { amount };

        let packs: Vec<BanknotesPack> = deposit.packs().collect();
        let unit = packs
            .iter()
            .map(|p| u64::from(p.banknote().value()))
            .fold(0, gcd);
        if unit == 0 || amount.amount % unit != 0 {
            return Err(unrepresentable);
        }

        let cells = amount.amount / unit;
        if cells > MAX_SEARCH_CELLS {
            return Err(DispenseError::SearchLimitExceeded {
                amount,
                limit: MAX_SEARCH_CELLS,
            });
        }
        let cells = usize::try_from(cells).map_err(|_| DispenseError::SearchLimitExceeded {
            amount,
            limit: MAX_SEARCH_CELLS,
        })?;

        let mut best = vec![UNREACHABLE; cells + 1];
        best[0] = 0;
        let mut layers: Vec<(BanknotesPack, usize, Vec<u32>)> = Vec::with_capacity(packs.len());

        for pack in packs {
            // Ladder values are small, so the step always fits.
            let step = usize::try_from(u64::from(pack.banknote().value()) / unit).unwrap_or(usize::MAX);
            let limit = usize::try_from(pack.count()).unwrap_or(usize::MAX);
            let (next, taken) = relax(&best, step, limit);
            best = next;
            layers.push((pack, step, taken));
        }

        if best[cells] == UNREACHABLE {
            return Err(unrepresentable);
        }

        let mut cell = cells;
        let mut breakdown = Vec::new();
        for (pack, step, taken) in layers.iter().rev() {
            let count = taken[cell];
            if count > 0 {
                breakdown.push(BanknotesPack::new(count, pack.banknote()));
                cell -= count as usize * step;
            }
        }
        breakdown.reverse();

        Ok(breakdown)
    }
}

/// Folds one denomination into the best-so-far table.
///
/// `prev[v]` is the fewest notes reaching `v` cells with the denominations
/// seen so far. Returns the updated table and, per cell, how many notes of
/// this denomination the optimum uses.
fn relax(prev: &[u64], step: usize, limit: usize) -> (Vec<u64>, Vec<u32>) {
    let len = prev.len();
    let mut next = vec![UNREACHABLE; len];
    let mut taken = vec![0u32; len];
    let mut window: VecDeque<usize> = VecDeque::new();

    // key(i) = prev[r + i*step] - i; smaller is better
    let key = |r: usize, i: usize| -> i128 { i128::from(prev[r + i * step]) - i as i128 };

    for r in 0..step.min(len) {
        window.clear();
        let mut j = 0;
        while r + j * step < len {
            if prev[r + j * step] != UNREACHABLE {
                while window.back().is_some_and(|&b| key(r, b) >= key(r, j)) {
                    window.pop_back();
                }
                window.push_back(j);
            }
            while window.front().is_some_and(|&f| j - f > limit) {
                window.pop_front();
            }
            if let Some(&i) = window.front() {
                let count = j - i;
                next[r + j * step] = prev[r + i * step] + count as u64;
                taken[r + j * step] = u32::try_from(count).unwrap_or(u32::MAX);
            }
            j += 1;
        }
    }

    (next, taken)
}

fn gcd(a: u64, b: u64) -> u64 {
    if b == 0 { a } else { gcd(b, a % b) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cash::Banknote;
    use atm_shared::Currency;
    use rstest::rstest;

    fn pln(amount: u64) -> Money {
        Money::new(amount, Currency::Pln)
    }

    fn reference_deposit() -> Deposit {
        Deposit::new(
            Currency::Pln,
            Banknote::catalog(Currency::Pln).map(|b| BanknotesPack::new(5, b)),
        )
        .unwrap()
    }

    fn total(breakdown: &[BanknotesPack]) -> u64 {
        breakdown.iter().map(BanknotesPack::value).sum()
    }

    #[test]
    fn test_greedy_reference_withdrawal() {
        let breakdown =
            DenominationSelector::select(pln(150), &reference_deposit(), SelectionStrategy::Greedy)
                .unwrap();
        assert_eq!(
            breakdown,
            vec![
                BanknotesPack::new(1, Banknote::PLN_100),
                BanknotesPack::new(1, Banknote::PLN_50),
            ]
        );
    }

    #[rstest]
    #[case(10, vec![BanknotesPack::new(1, Banknote::PLN_10)])]
    #[case(80, vec![BanknotesPack::new(1, Banknote::PLN_50), BanknotesPack::new(1, Banknote::PLN_20), BanknotesPack::new(1, Banknote::PLN_10)])]
    #[case(1000, vec![BanknotesPack::new(2, Banknote::PLN_500)])]
    #[case(2600, vec![BanknotesPack::new(5, Banknote::PLN_500), BanknotesPack::new(1, Banknote::PLN_100)])]
    fn test_greedy_breakdowns(#[case] amount: u64, #[case] expected: Vec<BanknotesPack>) {
        let breakdown =
            DenominationSelector::select(pln(amount), &reference_deposit(), SelectionStrategy::Greedy)
                .unwrap();
        assert_eq!(breakdown, expected);
    }

    #[test]
    fn test_greedy_whole_reserve() {
        let deposit = reference_deposit();
        let breakdown = DenominationSelector::select(
            deposit.total_value(),
            &deposit,
            SelectionStrategy::Greedy,
        )
        .unwrap();
        assert_eq!(breakdown, deposit.packs().collect::<Vec<_>>());
    }

    #[rstest]
    #[case(SelectionStrategy::Greedy)]
    #[case(SelectionStrategy::FewestNotes)]
    fn test_unrepresentable_amount(#[case] strategy: SelectionStrategy) {
        let result = DenominationSelector::select(pln(155), &reference_deposit(), strategy);
        assert_eq!(result, Err(DispenseError::Unrepresentable { amount: pln(155) }));
    }

    #[rstest]
    #[case(SelectionStrategy::Greedy)]
    #[case(SelectionStrategy::FewestNotes)]
    fn test_zero_amount(#[case] strategy: SelectionStrategy) {
        let result = DenominationSelector::select(pln(0), &reference_deposit(), strategy);
        assert_eq!(result, Err(DispenseError::ZeroAmount));
    }

    #[test]
    fn test_currency_mismatch() {
        let result = DenominationSelector::select(
            Money::new(100, Currency::Eur),
            &reference_deposit(),
            SelectionStrategy::Greedy,
        );
        assert_eq!(
            result,
            Err(DispenseError::CurrencyMismatch {
                expected: Currency::Pln,
                actual: Currency::Eur
            })
        );
    }

    #[test]
    fn test_exceeds_reserve() {
        let result =
            DenominationSelector::select(pln(4410), &reference_deposit(), SelectionStrategy::Greedy);
        assert_eq!(
            result,
            Err(DispenseError::ExceedsReserve {
                requested: pln(4410),
                available: pln(4400)
            })
        );
    }

    #[test]
    fn test_single_note_reserve() {
        let deposit = Deposit::new(Currency::Pln, [BanknotesPack::new(1, Banknote::PLN_10)]).unwrap();

        let breakdown =
            DenominationSelector::select(pln(10), &deposit, SelectionStrategy::Greedy).unwrap();
        assert_eq!(breakdown, vec![BanknotesPack::new(1, Banknote::PLN_10)]);

        assert!(matches!(
            DenominationSelector::select(pln(20), &deposit, SelectionStrategy::Greedy),
            Err(DispenseError::ExceedsReserve { .. })
        ));
    }

    #[test]
    fn test_greedy_misses_when_supply_is_short() {
        let deposit = Deposit::new(
            Currency::Pln,
            [
                BanknotesPack::new(1, Banknote::PLN_50),
                BanknotesPack::new(3, Banknote::PLN_20),
            ],
        )
        .unwrap();

        assert_eq!(
            DenominationSelector::select(pln(60), &deposit, SelectionStrategy::Greedy),
            Err(DispenseError::Unrepresentable { amount: pln(60) })
        );

        let breakdown =
            DenominationSelector::select(pln(60), &deposit, SelectionStrategy::FewestNotes).unwrap();
        assert_eq!(breakdown, vec![BanknotesPack::new(3, Banknote::PLN_20)]);
    }

    #[test]
    fn test_fewest_notes_matches_greedy_on_reference() {
        let deposit = reference_deposit();
        for amount in (10..=1000).step_by(10) {
            let greedy =
                DenominationSelector::select(pln(amount), &deposit, SelectionStrategy::Greedy).unwrap();
            let exact =
                DenominationSelector::select(pln(amount), &deposit, SelectionStrategy::FewestNotes)
                    .unwrap();
            assert_eq!(total(&exact), amount);
            let notes = |b: &[BanknotesPack]| b.iter().map(|p| p.count()).sum::<u32>();
            assert_eq!(notes(&exact), notes(&greedy), "amount {amount}");
        }
    }

    #[test]
    fn test_fewest_notes_respects_counts() {
        // 90 = 50 + 20 + 20 when only one 10 is left
        let deposit = Deposit::new(
            Currency::Pln,
            [
                BanknotesPack::new(1, Banknote::PLN_50),
                BanknotesPack::new(2, Banknote::PLN_20),
                BanknotesPack::new(1, Banknote::PLN_10),
            ],
        )
        .unwrap();
        let breakdown =
            DenominationSelector::select(pln(90), &deposit, SelectionStrategy::FewestNotes).unwrap();
        assert_eq!(
            breakdown,
            vec![
                BanknotesPack::new(1, Banknote::PLN_50),
                BanknotesPack::new(2, Banknote::PLN_20),
            ]
        );
    }

    #[test]
    fn test_fewest_notes_search_limit() {
        let deposit = Deposit::new(Currency::Usd, [BanknotesPack::new(u32::MAX, Banknote::USD_1)]).unwrap();
        let amount = Money::new(MAX_SEARCH_CELLS + 1, Currency::Usd);
        assert_eq!(
            DenominationSelector::select(amount, &deposit, SelectionStrategy::FewestNotes),
            Err(DispenseError::SearchLimitExceeded {
                amount,
                limit: MAX_SEARCH_CELLS
            })
        );
        // Greedy has no such limit.
        assert!(DenominationSelector::select(amount, &deposit, SelectionStrategy::Greedy).is_ok());
    }

    #[test]
    fn test_select_does_not_mutate() {
        let deposit = reference_deposit();
        let before = deposit.clone();
        let _ = DenominationSelector::select(pln(1230), &deposit, SelectionStrategy::Greedy);
        let _ = DenominationSelector::select(pln(1230), &deposit, SelectionStrategy::FewestNotes);
        assert_eq!(deposit, before);
    }

    #[test]
    fn test_gcd() {
        assert_eq!(gcd(0, 10), 10);
        assert_eq!(gcd(50, 20), 10);
        assert_eq!(gcd(5, 2), 1);
    }
}
