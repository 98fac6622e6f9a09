//! Change-making engine.
//!
//! Validates a request, converts it to minor units, and picks greedy descent
//! or dynamic programming depending on the coin system.

use changemaker_shared::ChangeConfig;
use changemaker_shared::types::{Amount, AmountError, MinorUnits};
use rust_decimal::Decimal;
use std::collections::BTreeSet;
use tracing::debug;

use super::cache::CanonicalCache;
use super::dynamic::solve_min_coins;
use super::error::ChangeError;
use super::greedy::greedy_change;
use super::types::{Change, CoinSystem, Strategy};

/// Engine for minimum-coin change.
///
/// Cheap to share behind an `Arc`; the only shared state is the verdict cache.
#[derive(Clone)]
pub struct ChangeEngine {
    max_amount: Decimal,
    scale: u32,
    max_denominations: usize,
    max_table_units: MinorUnits,
    cache: CanonicalCache,
}

impl ChangeEngine {
    /// Creates an engine from configuration.
    #[must_use]
    pub fn new(config: &ChangeConfig) -> Self {
        Self {
            max_amount: config.max_amount,
            scale: config.minor_unit_scale,
            max_denominations: config.max_denominations,
            max_table_units: config.max_table_units,
            cache: CanonicalCache::with_config(
                config.cache_capacity,
                config.cache_ttl_secs,
                config.canonical_check_limit,
            ),
        }
    }

    /// Largest accepted target.
    #[must_use]
    pub const fn max_amount(&self) -> Decimal {
        self.max_amount
    }

    /// Minor-unit scale in decimal places.
    #[must_use]
    pub const fn scale(&self) -> u32 {
        self.scale
    }

    /// Verdict cache, exposed for maintenance.
    #[must_use]
    pub const fn cache(&self) -> &CanonicalCache {
        &self.cache
    }

    /// Makes change for `target` from unlimited supplies of `denominations`.
    ///
    /// Returns the coins largest first, using the fewest coins possible.
    /// A zero target yields no coins.
    ///
    /// # Errors
    ///
    /// - Denomination list empty, too long, non-positive or finer than the
    ///   minor unit: input errors.
    /// - Target negative or above the configured maximum: `OutOfRange`.
    /// - Target needing a table above `max_table_units`: `TableTooLarge`.
    /// - No exact combination: `Unreachable`.
    pub fn make_change(
        &self,
        target: Amount,
        denominations: &[Amount],
    ) -> Result<Change, ChangeError> {
        let coins = self.validate_denominations(denominations)?;

        if target.is_negative() || target.value() > self.max_amount {
            return Err(ChangeError::OutOfRange {
                amount: target.value(),
                max: self.max_amount,
            });
        }

        if target.is_zero() {
            return Ok(Change::empty());
        }

        let unreachable = || ChangeError::Unreachable {
            target: target.value(),
        };

        let target_units = target.to_minor_units(self.scale).map_err(|_| unreachable())?;
        let system = CoinSystem::new(coins).ok_or_else(unreachable)?;

        if target_units % system.gcd() != 0 {
            debug!(%target, gcd = system.gcd(), "Target is not a multiple of the coin gcd");
            return Err(unreachable());
        }

        let verdict = self.cache.classify(&system);
        debug!(
            %target,
            coins = system.len(),
            canonical = verdict.canonical,
            cached = verdict.cached,
            "Classified coin system"
        );

        if verdict.canonical
            && let Some(units) = greedy_change(system.coins(), target_units)
        {
            return Ok(Change::from_minor_units(units, self.scale, Strategy::Greedy));
        }

        if target_units > self.max_table_units {
            return Err(ChangeError::TableTooLarge {
                amount: target.value(),
                units: target_units,
                limit: self.max_table_units,
            });
        }

        let units = solve_min_coins(system.usable_for(target_units), target_units)
            .ok_or_else(unreachable)?;
        Ok(Change::from_minor_units(units, self.scale, Strategy::Dynamic))
    }

    /// Checks denominations and converts the usable ones to minor units.
    ///
    /// Denominations above the maximum target can never be used and are
    /// dropped.
    fn validate_denominations(
        &self,
        denominations: &[Amount],
    ) -> Result<Vec<MinorUnits>, ChangeError> {
        if denominations.is_empty() {
            return Err(ChangeError::EmptyDenominations);
        }

        let distinct: BTreeSet<Decimal> = denominations.iter().map(Amount::value).collect();
        if distinct.len() > self.max_denominations {
            return Err(ChangeError::TooManyDenominations {
                count: distinct.len(),
                max: self.max_denominations,
            });
        }

        let mut coins = Vec::with_capacity(distinct.len());
        for denomination in distinct {
            let amount = Amount::new(denomination);
            if !amount.is_positive() {
                return Err(ChangeError::InvalidDenomination { denomination });
            }
            match amount.to_minor_units(self.scale) {
                Ok(units) if denomination <= self.max_amount => coins.push(units),
                Ok(_) | Err(AmountError::Overflow { .. }) => {
                    debug!(%denomination, "Dropping denomination above the maximum amount");
                }
                Err(AmountError::ExcessPrecision { scale, .. }) => {
                    return Err(ChangeError::DenominationPrecision {
                        denomination,
                        scale,
                    });
                }
            }
        }

        Ok(coins)
    }
}

impl Default for ChangeEngine {
    fn default() -> Self {
        Self::new(&ChangeConfig::default())
    }
}
