//! Minimum-coin change making.
//!
//! This module implements the change-making service:
//! - Coin systems held in integer minor units
//! - Greedy descent for canonical systems
//! - Dynamic programming for everything else
//! - Canonical-system detection with a verdict cache
//! - The engine tying validation and solving together

pub mod cache;
pub mod canonical;
pub mod dynamic;
pub mod engine;
pub mod error;
pub mod greedy;
pub mod types;

#[cfg(test)]
mod props;

#[cfg(test)]
mod benchmark;

pub use cache::{CanonicalCache, Verdict};
pub use canonical::is_canonical;
pub use dynamic::{ChangeTable, solve_min_coins};
pub use engine::ChangeEngine;
pub use error::ChangeError;
pub use greedy::{greedy_change, greedy_count};
pub use types::{Change, CoinSystem, Strategy};
