//! Minimum-coin change by dynamic programming.
//!
//! Builds `min_coins[a]` for every amount `a` in `0..=limit`, remembering the
//! coin that achieved each minimum, then walks back from the target.
//! Time O(limit * coins), space O(limit).

use changemaker_shared::types::MinorUnits;

const UNREACHABLE: u32 = u32::MAX;

/// Minimum coin counts for every amount up to a limit.
#[derive(Debug, Clone)]
pub struct ChangeTable {
    coins: Vec<MinorUnits>,
    min_coins: Vec<u32>,
    last_coin: Vec<u32>,
}

impl ChangeTable {
    /// Fills the table for `0..=limit` using `coins`, which must be sorted
    /// largest first.
    ///
    /// Coins are tried largest first and only a strict improvement replaces
    /// an entry, so among minimal combinations the walk back prefers larger
    /// coins.
    #[must_use]
    pub fn build(coins: &[MinorUnits], limit: usize) -> Self {
        let mut min_coins = vec![UNREACHABLE; limit + 1];
        let mut last_coin = vec![0u32; limit + 1];
        min_coins[0] = 0;

        let sized: Vec<(usize, u32)> = coins
            .iter()
            .enumerate()
            .filter_map(|(idx, &c)| Some((usize::try_from(c).ok()?, u32::try_from(idx).ok()?)))
            .filter(|&(c, _)| c > 0)
            .collect();

        for amount in 1..=limit {
            for &(coin, idx) in &sized {
                if coin > amount {
                    continue;
                }
                let prev = min_coins[amount - coin];
                if prev != UNREACHABLE && prev + 1 < min_coins[amount] {
                    min_coins[amount] = prev + 1;
                    last_coin[amount] = idx;
                }
            }
        }

        Self {
            coins: coins.to_vec(),
            min_coins,
            last_coin,
        }
    }

    /// Largest amount covered by the table.
    #[must_use]
    pub fn limit(&self) -> usize {
        self.min_coins.len() - 1
    }

    /// Minimum number of coins for `amount`, or `None` if unreachable or
    /// outside the table.
    #[must_use]
    pub fn min_coins(&self, amount: usize) -> Option<u32> {
        self.min_coins
            .get(amount)
            .copied()
            .filter(|&n| n != UNREACHABLE)
    }

    /// Reconstructs a minimal coin list for `amount`.
    #[must_use]
    pub fn coins_for(&self, amount: usize) -> Option<Vec<MinorUnits>> {
        let count = self.min_coins(amount)?;
        let mut selected = Vec::with_capacity(usize::try_from(count).ok()?);
        let mut remaining = amount;

        while remaining > 0 {
            let coin = *self.coins.get(usize::try_from(self.last_coin[remaining]).ok()?)?;
            selected.push(coin);
            remaining = remaining.checked_sub(usize::try_from(coin).ok()?)?;
        }

        Some(selected)
    }
}

/// Minimum-coin change for `target` using `coins` (largest first).
///
/// Returns `None` if no combination sums to `target`.
#[must_use]
pub fn solve_min_coins(coins: &[MinorUnits], target: MinorUnits) -> Option<Vec<MinorUnits>> {
    let limit = usize::try_from(target).ok()?;
    ChangeTable::build(coins, limit).coins_for(limit)
}
