//! Change-making data types.

use changemaker_shared::types::{Amount, MinorUnits};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A set of distinct positive denominations in minor units.
///
/// Coins are kept sorted largest first.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CoinSystem {
    coins: Vec<MinorUnits>,
}

impl CoinSystem {
    /// Builds a coin system, sorting and removing duplicates.
    ///
    /// Returns `None` if `coins` is empty or holds a non-positive value.
    #[must_use]
    pub fn new(mut coins: Vec<MinorUnits>) -> Option<Self> {
        if coins.is_empty() || coins.iter().any(|&c| c <= 0) {
            return None;
        }
        coins.sort_unstable_by(|a, b| b.cmp(a));
        coins.dedup();
        Some(Self { coins })
    }

    /// Coins, largest first.
    #[must_use]
    pub fn coins(&self) -> &[MinorUnits] {
        &self.coins
    }

    /// Number of distinct coins.
    #[must_use]
    pub fn len(&self) -> usize {
        self.coins.len()
    }

    /// Always false; a coin system holds at least one coin.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.coins.is_empty()
    }

    /// Largest coin.
    #[must_use]
    pub fn largest(&self) -> MinorUnits {
        self.coins[0]
    }

    /// Smallest coin.
    #[must_use]
    pub fn smallest(&self) -> MinorUnits {
        self.coins[self.coins.len() - 1]
    }

    /// Greatest common divisor of all coins.
    #[must_use]
    pub fn gcd(&self) -> MinorUnits {
        self.coins.iter().fold(0, |acc, &c| gcd(acc, c))
    }

    /// Coins no larger than `target`, largest first.
    #[must_use]
    pub fn usable_for(&self, target: MinorUnits) -> &[MinorUnits] {
        let start = self.coins.partition_point(|&c| c > target);
        &self.coins[start..]
    }

    /// Returns a copy with every coin divided by the system's gcd.
    #[must_use]
    pub fn reduced(&self) -> Self {
        let g = self.gcd();
        Self {
            coins: self.coins.iter().map(|&c| c / g).collect(),
        }
    }
}

fn gcd(mut a: MinorUnits, mut b: MinorUnits) -> MinorUnits {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// How a result was computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Largest-coin-first descent on a canonical system.
    Greedy,
    /// Minimum-coin table over every sub-amount.
    Dynamic,
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Greedy => write!(f, "greedy"),
            Self::Dynamic => write!(f, "dynamic"),
        }
    }
}

/// Coins selected for a target, largest first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Change {
    /// Selected coins in non-increasing order.
    pub coins: Vec<Amount>,
    /// Strategy that produced the selection.
    pub strategy: Strategy,
}

impl Change {
    /// Change for a zero target.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            coins: Vec::new(),
            strategy: Strategy::Greedy,
        }
    }

    /// Builds a result from minor units at the given scale.
    #[must_use]
    pub fn from_minor_units(mut units: Vec<MinorUnits>, scale: u32, strategy: Strategy) -> Self {
        units.sort_unstable_by(|a, b| b.cmp(a));
        Self {
            coins: units
                .into_iter()
                .map(|u| Amount::from_minor_units(u, scale))
                .collect(),
            strategy,
        }
    }

    /// Number of coins used.
    #[must_use]
    pub fn coin_count(&self) -> usize {
        self.coins.len()
    }

    /// Sum of the selected coins.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.coins.iter().map(Amount::value).sum()
    }
}
