//! Property-based tests for denomination selection.
//!
//! - Exactness: a returned breakdown sums to the requested amount
//! - Availability bound: no denomination is over-drawn
//! - Optimality: the exact search never uses more notes than greedy
//! - Completeness: the exact search agrees with brute force on small reserves

use proptest::prelude::*;

use atm_shared::{Currency, Money, SelectionStrategy};

use super::selector::DenominationSelector;
use crate::cash::{Banknote, BanknotesPack, Deposit};

/// Strategy to generate a reserve with 0..=max notes of each denomination.
fn deposit_strategy(currency: Currency, max: u32) -> impl Strategy<Value = Deposit> {
    let ladder_len = Banknote::denominations(currency).len();
    prop::collection::vec(0u32..=max, ladder_len).prop_map(move |counts| {
        let packs = Banknote::catalog(currency)
            .zip(counts)
            .map(|(banknote, count)| BanknotesPack::new(count, banknote));
        Deposit::new(currency, packs).expect("generated packs share the currency")
    })
}

fn note_count(breakdown: &[BanknotesPack]) -> u64 {
    breakdown.iter().map(|p| u64::from(p.count())).sum()
}

fn total(breakdown: &[BanknotesPack]) -> u64 {
    breakdown.iter().map(BanknotesPack::value).sum()
}

/// Fewest notes over every combination within the reserve, by enumeration.
fn brute_force_min_notes(target: u64, deposit: &Deposit) -> Option<u64> {
    fn go(packs: &[BanknotesPack], remaining: u64) -> Option<u64> {
        let Some((first, rest)) = packs.split_first() else {
            return (remaining == 0).then_some(0);
        };
        let value = u64::from(first.banknote().value());
        (0..=first.count())
            .map(u64::from)
            .take_while(|k| k * value <= remaining)
            .filter_map(|k| go(rest, remaining - k * value).map(|n| n + k))
            .min()
    }
    let packs: Vec<_> = deposit.packs().collect();
    go(&packs, target)
}

fn assert_valid(breakdown: &[BanknotesPack], amount: u64, deposit: &Deposit) -> Result<(), TestCaseError> {
    prop_assert_eq!(total(breakdown), amount);
    for pack in breakdown {
        prop_assert!(pack.count() > 0, "empty pack in breakdown");
        prop_assert!(
            pack.count() <= deposit.available_count(pack.banknote()),
            "{} over-drawn",
            pack.banknote()
        );
    }
    prop_assert!(
        breakdown
            .windows(2)
            .all(|w| w[0].banknote().value() > w[1].banknote().value()),
        "breakdown not in descending order"
    );
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Greedy breakdowns are exact and bounded by availability.
    #[test]
    fn prop_greedy_exact_and_bounded(
        deposit in deposit_strategy(Currency::Pln, 8),
        tens in 1u64..=300,
    ) {
        let amount = tens * 10;
        if let Ok(breakdown) = DenominationSelector::select(
            Money::new(amount, Currency::Pln),
            &deposit,
            SelectionStrategy::Greedy,
        ) {
            assert_valid(&breakdown, amount, &deposit)?;
        }
    }

    /// Exact search breakdowns are exact and bounded by availability.
    #[test]
    fn prop_fewest_notes_exact_and_bounded(
        deposit in deposit_strategy(Currency::Eur, 8),
        amount in 1u64..=2000,
    ) {
        if let Ok(breakdown) = DenominationSelector::select(
            Money::new(amount, Currency::Eur),
            &deposit,
            SelectionStrategy::FewestNotes,
        ) {
            assert_valid(&breakdown, amount, &deposit)?;
        }
    }

    /// Whenever greedy succeeds, the exact search succeeds with no more notes.
    #[test]
    fn prop_fewest_notes_never_worse_than_greedy(
        deposit in deposit_strategy(Currency::Pln, 6),
        tens in 1u64..=250,
    ) {
        let amount = Money::new(tens * 10, Currency::Pln);
        let greedy = DenominationSelector::select(amount, &deposit, SelectionStrategy::Greedy);
        let exact = DenominationSelector::select(amount, &deposit, SelectionStrategy::FewestNotes);

        if let Ok(greedy) = greedy {
            let exact = exact.expect("exact search must succeed where greedy does");
            prop_assert!(note_count(&exact) <= note_count(&greedy));
        }
    }

    /// With ample supply the built-in ladder makes greedy optimal.
    #[test]
    fn prop_greedy_optimal_with_ample_supply(
        count in 50u32..=60,
        tens in 1u64..=300,
    ) {
        let deposit = Deposit::new(
            Currency::Pln,
            Banknote::catalog(Currency::Pln).map(|b| BanknotesPack::new(count, b)),
        ).expect("single currency");
        let amount = Money::new(tens * 10, Currency::Pln);

        let greedy = DenominationSelector::select(amount, &deposit, SelectionStrategy::Greedy)
            .expect("multiples of 10 are always representable with ample supply");
        let exact = DenominationSelector::select(amount, &deposit, SelectionStrategy::FewestNotes)
            .expect("exact search agrees");
        prop_assert_eq!(note_count(&greedy), note_count(&exact));
    }

    /// The exact search finds the true minimum on small reserves.
    #[test]
    fn prop_fewest_notes_matches_brute_force(
        deposit in deposit_strategy(Currency::Usd, 3),
        amount in 1u64..=200,
    ) {
        let expected = brute_force_min_notes(amount, &deposit);
        let actual = DenominationSelector::select(
            Money::new(amount, Currency::Usd),
            &deposit,
            SelectionStrategy::FewestNotes,
        )
        .ok()
        .map(|b| note_count(&b));
        prop_assert_eq!(actual, expected);
    }

    /// Selection never changes the reserve.
    #[test]
    fn prop_select_is_pure(
        deposit in deposit_strategy(Currency::Pln, 5),
        tens in 1u64..=200,
    ) {
        let before = deposit.clone();
        let amount = Money::new(tens * 10, Currency::Pln);
        let _ = DenominationSelector::select(amount, &deposit, SelectionStrategy::Greedy);
        let _ = DenominationSelector::select(amount, &deposit, SelectionStrategy::FewestNotes);
        prop_assert_eq!(deposit, before);
    }
}
