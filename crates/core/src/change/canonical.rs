//! Canonical coin system detection.
//!
//! A coin system is canonical when greedy descent always yields the minimum
//! number of coins. For a system `1 = c1 < c2 < ... < cn`, Kozen and Zaks
//! showed that if a counterexample exists, the smallest one lies strictly
//! between `c3 + 1` and `cn + c(n-1)`. Systems with fewer than three coins
//! are always canonical.
//!
//! Systems whose smallest coin (after dividing by the gcd) is not 1 are
//! reported as non-canonical: greedy can fail outright on them, e.g.
//! `{3, 5}` at 9.

use changemaker_shared::types::MinorUnits;

use super::dynamic::ChangeTable;
use super::greedy::greedy_count;
use super::types::CoinSystem;

/// Returns true if greedy change is optimal for every reachable target.
///
/// Returns false, conservatively, when the search window `cn + c(n-1)` in
/// reduced units exceeds `check_limit`.
#[must_use]
pub fn is_canonical(system: &CoinSystem, check_limit: MinorUnits) -> bool {
    let reduced = system.reduced();
    if reduced.smallest() != 1 {
        return false;
    }

    let coins = reduced.coins();
    if coins.len() < 3 {
        return true;
    }

    let window_end = coins[0].saturating_add(coins[1]);
    if window_end > check_limit {
        return false;
    }

    // Coins are largest first, so c3 is third from the end.
    let c3 = coins[coins.len() - 3];
    let Ok(limit) = usize::try_from(window_end) else {
        return false;
    };
    let table = ChangeTable::build(coins, limit);

    ((c3 + 2)..window_end).all(|amount| {
        let optimal = usize::try_from(amount)
            .ok()
            .and_then(|a| table.min_coins(a))
            .map(u64::from);
        greedy_count(coins, amount) == optimal
    })
}
