//! Largest-coin-first change.
//!
//! Optimal only on canonical coin systems, see [`super::canonical`].

use changemaker_shared::types::MinorUnits;

/// Makes change by repeatedly taking the largest coin that fits.
///
/// `coins` must be sorted largest first. Returns `None` if the descent
/// leaves a remainder no coin can cover.
#[must_use]
pub fn greedy_change(coins: &[MinorUnits], target: MinorUnits) -> Option<Vec<MinorUnits>> {
    let mut remaining = target;
    let mut selected = Vec::new();

    for &coin in coins {
        if remaining == 0 {
            break;
        }
        let count = remaining / coin;
        if count > 0 {
            selected.extend(std::iter::repeat_n(coin, usize::try_from(count).ok()?));
            remaining %= coin;
        }
    }

    (remaining == 0).then_some(selected)
}

/// Number of coins [`greedy_change`] would use, without allocating.
#[must_use]
pub fn greedy_count(coins: &[MinorUnits], target: MinorUnits) -> Option<u64> {
    let mut remaining = target;
    let mut count = 0u64;

    for &coin in coins {
        count += u64::try_from(remaining / coin).ok()?;
        remaining %= coin;
    }

    (remaining == 0).then_some(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CENTS: [MinorUnits; 5] = [50, 20, 10, 5, 1];

    #[test]
    fn test_greedy_picks_largest_first() {
        assert_eq!(greedy_change(&CENTS, 30), Some(vec![20, 10]));
        assert_eq!(greedy_change(&CENTS, 88), Some(vec![50, 20, 10, 5, 1, 1, 1]));
    }

    #[test]
    fn test_greedy_zero_target() {
        assert_eq!(greedy_change(&CENTS, 0), Some(vec![]));
        assert_eq!(greedy_count(&CENTS, 0), Some(0));
    }

    #[test]
    fn test_greedy_fails_with_remainder() {
        assert_eq!(greedy_change(&[20, 5], 7), None);
        assert_eq!(greedy_count(&[20, 5], 7), None);
    }

    #[test]
    fn test_greedy_can_miss_a_solution() {
        // 9 = 3 + 3 + 3, but 5 is taken first and leaves 4.
        assert_eq!(greedy_change(&[5, 3], 9), None);
    }

    #[test]
    fn test_greedy_count_matches_change() {
        for target in 0..200 {
            let change = greedy_change(&CENTS, target).unwrap();
            assert_eq!(greedy_count(&CENTS, target), Some(change.len() as u64));
        }
    }
}
