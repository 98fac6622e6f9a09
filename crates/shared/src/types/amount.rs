//! Fixed-point amount type and minor-unit conversion.
//!
//! CRITICAL: Never use floating-point for change calculations.
//! Amounts are carried as `rust_decimal::Decimal` and converted to integer
//! minor units (e.g. cents) before any arithmetic.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Integer count of the smallest currency unit at a given scale.
pub type MinorUnits = i64;

/// Errors converting an amount to minor units.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmountError {
    /// The amount has more decimal places than the minor unit supports.
    #[error("{amount} has more than {scale} decimal places")]
    ExcessPrecision {
        /// Offending amount.
        amount: Decimal,
        /// Minor-unit scale in decimal places.
        scale: u32,
    },

    /// The amount does not fit in 64-bit minor units.
    #[error("{amount} is too large to represent in minor units")]
    Overflow {
        /// Offending amount.
        amount: Decimal,
    },
}

/// A monetary amount with exact decimal precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amount(Decimal);

impl Amount {
    /// Zero amount.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Creates a new amount.
    #[must_use]
    pub const fn new(value: Decimal) -> Self {
        Self(value)
    }

    /// Builds an amount back from minor units at the given scale.
    #[must_use]
    pub fn from_minor_units(units: MinorUnits, scale: u32) -> Self {
        Self(Decimal::new(units, scale))
    }

    /// Returns the underlying decimal.
    #[must_use]
    pub const fn value(&self) -> Decimal {
        self.0
    }

    /// Returns true if the amount is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Returns true if the amount is strictly negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    /// Returns true if the amount is strictly positive.
    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.0.is_sign_positive() && !self.0.is_zero()
    }

    /// Number of significant decimal places, ignoring trailing zeros.
    #[must_use]
    pub fn significant_scale(&self) -> u32 {
        self.0.normalize().scale()
    }

    /// Converts to integer minor units at `scale` decimal places.
    ///
    /// `0.10` at scale 2 is `10`. `0.105` at scale 2 fails rather than rounds.
    pub fn to_minor_units(&self, scale: u32) -> Result<MinorUnits, AmountError> {
        if self.significant_scale() > scale {
            return Err(AmountError::ExcessPrecision {
                amount: self.0,
                scale,
            });
        }

        let mut scaled = self.0;
        scaled.rescale(scale);
        if scaled.scale() != scale {
            return Err(AmountError::Overflow { amount: self.0 });
        }

        MinorUnits::try_from(scaled.mantissa())
            .map_err(|_| AmountError::Overflow { amount: self.0 })
    }
}

impl From<Decimal> for Amount {
    fn from(value: Decimal) -> Self {
        Self(value)
    }
}

impl From<Amount> for Decimal {
    fn from(value: Amount) -> Self {
        value.0
    }
}

impl std::fmt::Display for Amount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
