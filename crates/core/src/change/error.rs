//! Change-making error types.

use changemaker_shared::AppError;
use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur while making change.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChangeError {
    // ========== Input Errors ==========
    /// No denominations were supplied.
    #[error("At least one denomination is required")]
    EmptyDenominations,

    /// Too many distinct denominations.
    #[error("Too many denominations: {count} given, at most {max} allowed")]
    TooManyDenominations {
        /// Number of distinct denominations supplied.
        count: usize,
        /// Configured maximum.
        max: usize,
    },

    /// Denomination is zero or negative.
    #[error("Denomination must be positive, got {denomination}")]
    InvalidDenomination {
        /// Offending denomination.
        denomination: Decimal,
    },

    /// Denomination is finer than the minor unit.
    #[error("Denomination {denomination} has more than {scale} decimal places")]
    DenominationPrecision {
        /// Offending denomination.
        denomination: Decimal,
        /// Minor-unit scale.
        scale: u32,
    },

    // ========== Range Errors ==========
    /// Target outside `0..=max`.
    #[error("Target amount {amount} must be between 0 and {max}")]
    OutOfRange {
        /// Requested target.
        amount: Decimal,
        /// Configured maximum.
        max: Decimal,
    },

    /// Target needs a dynamic-programming table beyond the configured size.
    #[error("Target amount {amount} is too large to search with these denominations")]
    TableTooLarge {
        /// Requested target.
        amount: Decimal,
        /// Target in minor units.
        units: i64,
        /// Configured table limit in minor units.
        limit: i64,
    },

    // ========== Solver Errors ==========
    /// No combination of the denominations sums to the target.
    #[error("No combination of the given denominations sums to {target}")]
    Unreachable {
        /// Requested target.
        target: Decimal,
    },
}

impl ChangeError {
    /// Returns true if the error is caused by malformed input.
    #[must_use]
    pub const fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Self::EmptyDenominations
                | Self::TooManyDenominations { .. }
                | Self::InvalidDenomination { .. }
                | Self::DenominationPrecision { .. }
        )
    }
}

impl From<ChangeError> for AppError {
    fn from(err: ChangeError) -> Self {
        let message = err.to_string();
        match err {
            ChangeError::OutOfRange { .. } | ChangeError::TableTooLarge { .. } => {
                Self::OutOfRange(message)
            }
            ChangeError::Unreachable { .. } => Self::Unreachable(message),
            ChangeError::EmptyDenominations
            | ChangeError::TooManyDenominations { .. }
            | ChangeError::InvalidDenomination { .. }
            | ChangeError::DenominationPrecision { .. } => Self::InvalidInput(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_maps_to_app_error_taxonomy() {
        let invalid: AppError = ChangeError::InvalidDenomination {
            denomination: dec!(0),
        }
        .into();
        assert_eq!(invalid.error_code(), "INVALID_INPUT");

        let range: AppError = ChangeError::OutOfRange {
            amount: dec!(10000.01),
            max: dec!(10000.00),
        }
        .into();
        assert_eq!(range.error_code(), "OUT_OF_RANGE");

        let table: AppError = ChangeError::TableTooLarge {
            amount: dec!(100),
            units: 100_000_000,
            limit: 10_000_000,
        }
        .into();
        assert_eq!(table.status_code(), 400);

        let unreachable: AppError = ChangeError::Unreachable { target: dec!(0.07) }.into();
        assert_eq!(unreachable.error_code(), "UNREACHABLE");
        assert_eq!(unreachable.status_code(), 422);
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            ChangeError::Unreachable { target: dec!(0.07) }.to_string(),
            "No combination of the given denominations sums to 0.07"
        );
        assert_eq!(
            ChangeError::OutOfRange {
                amount: dec!(10000.01),
                max: dec!(10000.00)
            }
            .to_string(),
            "Target amount 10000.01 must be between 0 and 10000.00"
        );
    }

    #[test]
    fn test_is_invalid_input() {
        assert!(ChangeError::EmptyDenominations.is_invalid_input());
        assert!(
            ChangeError::DenominationPrecision {
                denomination: dec!(0.001),
                scale: 2
            }
            .is_invalid_input()
        );
        assert!(!ChangeError::Unreachable { target: dec!(1) }.is_invalid_input());
    }
}
