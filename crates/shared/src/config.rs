//! Application configuration management.

use rust_decimal::Decimal;
use serde::Deserialize;

/// Largest minor-unit scale the solver accepts.
pub const MAX_MINOR_UNIT_SCALE: u32 = 6;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Change-making limits and cache settings.
    #[serde(default)]
    pub change: ChangeConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Maximum accepted request body size in bytes.
    #[serde(default = "default_body_limit_bytes")]
    pub body_limit_bytes: usize,
    /// Maximum number of calculations running at once.
    #[serde(default = "default_max_concurrent_solves")]
    pub max_concurrent_solves: usize,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_body_limit_bytes() -> usize {
    64 * 1024
}

fn default_max_concurrent_solves() -> usize {
    16
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            body_limit_bytes: default_body_limit_bytes(),
            max_concurrent_solves: default_max_concurrent_solves(),
        }
    }
}

impl ServerConfig {
    /// Checks that the limits are usable.
    ///
    /// # Errors
    ///
    /// Returns a message describing the first invalid setting.
    pub fn validate(&self) -> Result<(), String> {
        if self.max_concurrent_solves == 0 {
            return Err("server.max_concurrent_solves must be at least 1".to_string());
        }
        Ok(())
    }
}

/// Change-making configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ChangeConfig {
    /// Largest target amount accepted (inclusive).
    #[serde(default = "default_max_amount")]
    pub max_amount: Decimal,
    /// Decimal places of the minor unit (2 = cents).
    #[serde(default = "default_minor_unit_scale")]
    pub minor_unit_scale: u32,
    /// Maximum number of distinct denominations per request.
    #[serde(default = "default_max_denominations")]
    pub max_denominations: usize,
    /// Upper bound, in minor units, on the canonical-system check.
    #[serde(default = "default_canonical_check_limit")]
    pub canonical_check_limit: i64,
    /// Maximum number of cached canonical verdicts.
    #[serde(default = "default_cache_capacity")]
    pub cache_capacity: u64,
    /// Time-to-live of a cached verdict in seconds.
    #[serde(default = "default_cache_ttl_secs")]
    pub cache_ttl_secs: u64,
    /// Largest target, in minor units, the dynamic-programming table may cover.
    #[serde(default = "default_max_table_units")]
    pub max_table_units: i64,
}

fn default_max_amount() -> Decimal {
    Decimal::new(1_000_000, 2) // 10000.00
}

fn default_minor_unit_scale() -> u32 {
    2
}

fn default_max_denominations() -> usize {
    64
}

fn default_canonical_check_limit() -> i64 {
    2_000_000
}

fn default_cache_capacity() -> u64 {
    1_000
}

fn default_cache_ttl_secs() -> u64 {
    3_600 // 1 hour
}

fn default_max_table_units() -> i64 {
    10_000_000 // ~80 MB of table
}

impl Default for ChangeConfig {
    fn default() -> Self {
        Self {
            max_amount: default_max_amount(),
            minor_unit_scale: default_minor_unit_scale(),
            max_denominations: default_max_denominations(),
            canonical_check_limit: default_canonical_check_limit(),
            cache_capacity: default_cache_capacity(),
            cache_ttl_secs: default_cache_ttl_secs(),
            max_table_units: default_max_table_units(),
        }
    }
}

impl ChangeConfig {
    /// Checks that the limits are usable.
    ///
    /// # Errors
    ///
    /// Returns a message describing the first invalid setting.
    pub fn validate(&self) -> Result<(), String> {
        if self.max_amount <= Decimal::ZERO {
            return Err(format!(
                "change.max_amount must be positive, got {}",
                self.max_amount
            ));
        }
        if self.minor_unit_scale > MAX_MINOR_UNIT_SCALE {
            return Err(format!(
                "change.minor_unit_scale must be at most {MAX_MINOR_UNIT_SCALE}, got {}",
                self.minor_unit_scale
            ));
        }
        if self.max_denominations == 0 {
            return Err("change.max_denominations must be at least 1".to_string());
        }
        if self.canonical_check_limit < 0 {
            return Err(format!(
                "change.canonical_check_limit must not be negative, got {}",
                self.canonical_check_limit
            ));
        }
        if self.max_table_units <= 0 {
            return Err(format!(
                "change.max_table_units must be positive, got {}",
                self.max_table_units
            ));
        }
        let max_units = self
            .max_amount
            .checked_mul(Decimal::from(10_i64.pow(self.minor_unit_scale)))
            .unwrap_or(Decimal::MAX);
        if max_units > Decimal::from(self.max_table_units) {
            return Err(format!(
                "change.max_amount {} is {max_units} minor units at scale {}, above change.max_table_units {}",
                self.max_amount, self.minor_unit_scale, self.max_table_units
            ));
        }
        Ok(())
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded or fails validation.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("CHANGEMAKER").separator("__"))
            .build()?;

        let app_config: Self = config.try_deserialize()?;
        app_config
            .server
            .validate()
            .and_then(|()| app_config.change.validate())
            .map_err(config::ConfigError::Message)?;

        Ok(app_config)
    }
}
