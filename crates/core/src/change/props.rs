//! Property-based tests for change making.
//!
//! - Exact sum: every returned selection sums to the target in minor units
//! - Optimality: dynamic programming matches an exhaustive search
//! - Canonical agreement: greedy and optimal counts agree on canonical systems

use changemaker_shared::types::{Amount, MinorUnits};
use proptest::prelude::*;
use rust_decimal::Decimal;
use std::collections::VecDeque;

use super::canonical::is_canonical;
use super::dynamic::{ChangeTable, solve_min_coins};
use super::engine::ChangeEngine;
use super::greedy::{greedy_change, greedy_count};
use super::types::CoinSystem;

/// Cent values of the everyday coin and note set.
const CANONICAL_CENTS: [MinorUnits; 12] = [
    100_000, 10_000, 5_000, 1_000, 500, 200, 100, 50, 20, 10, 5, 1,
];

/// Strategy to generate a target in cents (0.00 to 10,000.00).
fn target_cents() -> impl Strategy<Value = MinorUnits> {
    0i64..=1_000_000
}

/// Strategy to generate a small coin system (1 to 5 coins of 1..60).
fn small_system() -> impl Strategy<Value = CoinSystem> {
    prop::collection::vec(1i64..60, 1..=5)
        .prop_map(|coins| CoinSystem::new(coins).expect("positive coins"))
}

/// Breadth-first search for the fewest coins; independent of the table.
fn reference_min_coins(coins: &[MinorUnits], target: MinorUnits) -> Option<u64> {
    let limit = usize::try_from(target).ok()?;
    let mut depth = vec![None; limit + 1];
    depth[0] = Some(0u64);
    let mut queue = VecDeque::from([0usize]);

    while let Some(amount) = queue.pop_front() {
        let d = depth[amount]?;
        for &coin in coins {
            let next = amount + usize::try_from(coin).ok()?;
            if next <= limit && depth[next].is_none() {
                depth[next] = Some(d + 1);
                queue.push_back(next);
            }
        }
    }

    depth[limit]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// DP selection sums to the target and matches the exhaustive minimum.
    #[test]
    fn prop_dynamic_is_exact_and_minimal(
        system in small_system(),
        target in 0i64..400,
    ) {
        let expected = reference_min_coins(system.coins(), target);
        let solved = solve_min_coins(system.usable_for(target), target);

        match solved {
            Some(coins) => {
                prop_assert_eq!(coins.iter().sum::<MinorUnits>(), target);
                prop_assert_eq!(Some(coins.len() as u64), expected);
            }
            None => prop_assert_eq!(expected, None),
        }
    }

    /// Greedy descent never beats the optimum and is never wrong about the sum.
    #[test]
    fn prop_greedy_never_beats_optimum(
        system in small_system(),
        target in 0i64..400,
    ) {
        if let Some(coins) = greedy_change(system.coins(), target) {
            prop_assert_eq!(coins.iter().sum::<MinorUnits>(), target);
            let optimum = reference_min_coins(system.coins(), target);
            prop_assert!(optimum.is_some_and(|o| o <= coins.len() as u64));
        }
    }

    /// A system classified canonical has greedy counts equal to optimal counts.
    #[test]
    fn prop_canonical_verdict_is_sound(system in small_system()) {
        if is_canonical(&system, 2_000_000) {
            let table = ChangeTable::build(system.coins(), 400);
            for amount in 0..=400i64 {
                let optimal = table.min_coins(usize::try_from(amount).unwrap()).map(u64::from);
                prop_assert_eq!(greedy_count(system.coins(), amount), optimal);
            }
        }
    }

    /// On the everyday coin set the engine's count equals the greedy count.
    #[test]
    fn prop_engine_matches_greedy_on_canonical_set(cents in target_cents()) {
        let engine = ChangeEngine::default();
        let denominations: Vec<Amount> = CANONICAL_CENTS
            .iter()
            .map(|&c| Amount::from_minor_units(c, 2))
            .collect();

        let change = engine
            .make_change(Amount::from_minor_units(cents, 2), &denominations)
            .expect("canonical set with a 0.01 coin reaches every target");

        prop_assert_eq!(change.total(), Decimal::new(cents, 2));
        prop_assert_eq!(
            Some(change.coin_count() as u64),
            greedy_count(&CANONICAL_CENTS, cents)
        );
    }

    /// Engine results always sum exactly to the requested target.
    #[test]
    fn prop_engine_sum_is_exact(
        system in small_system(),
        cents in 0i64..2_000,
    ) {
        let engine = ChangeEngine::default();
        let denominations: Vec<Amount> = system
            .coins()
            .iter()
            .map(|&c| Amount::from_minor_units(c, 2))
            .collect();
        let target = Amount::from_minor_units(cents, 2);

        if let Ok(change) = engine.make_change(target, &denominations) {
            prop_assert_eq!(change.total(), target.value());
            prop_assert!(change.coins.windows(2).all(|w| w[0] >= w[1]));
        } else {
            prop_assert_eq!(reference_min_coins(system.coins(), cents), None);
        }
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn test_reference_search() {
        assert_eq!(reference_min_coins(&[4, 3, 1], 6), Some(2));
        assert_eq!(reference_min_coins(&[5, 3], 7), None);
        assert_eq!(reference_min_coins(&[5, 3], 0), Some(0));
    }

    #[test]
    fn test_canonical_cents_classified_canonical() {
        let system = CoinSystem::new(CANONICAL_CENTS.to_vec()).unwrap();
        assert!(is_canonical(&system, 2_000_000));
    }
}
