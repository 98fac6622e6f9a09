//! Canonical verdict caching using Moka.
//!
//! Classifying a coin system costs a dynamic-programming pass over
//! `cn + c(n-1)` minor units. The verdict only depends on the coins, so it is
//! cached per system and later requests with the same denominations go
//! straight to greedy descent.

use changemaker_shared::types::MinorUnits;
use moka::sync::Cache;
use std::time::Duration;

use super::canonical::is_canonical;
use super::types::CoinSystem;

/// Default cache capacity (number of entries).
const DEFAULT_CACHE_CAPACITY: u64 = 1_000;

/// Default time-to-live for cache entries (1 hour).
const DEFAULT_TTL_SECS: u64 = 3_600;

/// Default bound on the canonical check window.
const DEFAULT_CHECK_LIMIT: MinorUnits = 2_000_000;

/// Outcome of a cache lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verdict {
    /// Whether greedy descent is optimal for the system.
    pub canonical: bool,
    /// Whether the verdict came from the cache.
    pub cached: bool,
}

/// Cache of canonical verdicts keyed by coin system.
///
/// Thread-safe and suitable for concurrent access.
#[derive(Clone)]
pub struct CanonicalCache {
    cache: Cache<CoinSystem, bool>,
    check_limit: MinorUnits,
}

impl CanonicalCache {
    /// Creates a new cache with default settings.
    ///
    /// Default: 1000 entries max, 1 hour TTL.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(DEFAULT_CACHE_CAPACITY, DEFAULT_TTL_SECS, DEFAULT_CHECK_LIMIT)
    }

    /// Creates a new cache with custom configuration.
    ///
    /// # Arguments
    ///
    /// * `max_capacity` - Maximum number of entries to cache
    /// * `ttl_secs` - Time-to-live in seconds for each entry
    /// * `check_limit` - Largest check window, in minor units, worth classifying
    #[must_use]
    pub fn with_config(max_capacity: u64, ttl_secs: u64, check_limit: MinorUnits) -> Self {
        let cache = Cache::builder()
            .max_capacity(max_capacity)
            .time_to_live(Duration::from_secs(ttl_secs))
            .build();

        Self { cache, check_limit }
    }

    /// Classifies a coin system, computing and caching the verdict on a miss.
    #[must_use]
    pub fn classify(&self, system: &CoinSystem) -> Verdict {
        if let Some(canonical) = self.cache.get(system) {
            return Verdict {
                canonical,
                cached: true,
            };
        }

        let canonical = is_canonical(system, self.check_limit);
        self.cache.insert(system.clone(), canonical);

        Verdict {
            canonical,
            cached: false,
        }
    }

    /// Invalidates all cached entries.
    pub fn invalidate_all(&self) {
        self.cache.invalidate_all();
    }

    /// Invalidates the verdict for one system.
    pub fn invalidate(&self, system: &CoinSystem) {
        self.cache.invalidate(system);
    }

    /// Returns the number of entries currently in the cache.
    #[must_use]
    pub fn entry_count(&self) -> u64 {
        self.cache.entry_count()
    }

    /// Runs cache maintenance tasks.
    ///
    /// Moka handles this in the background; calling it makes
    /// `entry_count` reflect recent inserts and evictions.
    pub fn run_pending_tasks(&self) {
        self.cache.run_pending_tasks();
    }
}

impl Default for CanonicalCache {
    fn default() -> Self {
        Self::new()
    }
}
