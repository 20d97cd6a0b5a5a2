//! Configuration management for the Supply Chain Dashboard
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (config/development.toml, config/production.toml)
//! 3. Environment variable overrides with SCD__ prefix (e.g. SCD__SESSION__STORAGE_KEY)

use std::path::PathBuf;
use std::time::Duration;

use chrono::{DateTime, Utc};

use config::{ConfigError, Environment, File};
use serde::Deserialize;
use shared::{GeneratorOptions, Locale};

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Mock catalog generation
    pub catalog: CatalogConfig,

    /// Session persistence and simulated auth latency
    pub session: SessionConfig,

    /// Presentation defaults
    pub display: DisplayConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CatalogConfig {
    /// Fixed seed for reproducible data; random when unset
    pub seed: Option<u64>,

    /// RFC 3339 instant the generated history counts back from; now when unset
    pub anchor: Option<DateTime<Utc>>,

    pub product_count: usize,

    pub supplier_count: usize,

    pub order_count: usize,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SessionConfig {
    /// JSON file standing in for browser local storage
    pub storage_path: PathBuf,

    /// Key the session record is stored under
    pub storage_key: String,

    /// Simulated sign-in round trip
    pub sign_in_delay_ms: u64,

    /// Simulated sign-out round trip
    pub sign_out_delay_ms: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DisplayConfig {
    /// Date locale for the orders table
    pub locale: Locale,

    /// Default page size for tables
    pub per_page: u32,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment = std::env::var("SCD_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("catalog.product_count", 20)?
            .set_default("catalog.supplier_count", 5)?
            .set_default("catalog.order_count", 50)?
            .set_default("session.storage_path", ".scd/local_storage.json")?
            .set_default("session.storage_key", "user")?
            .set_default("session.sign_in_delay_ms", 1000)?
            .set_default("session.sign_out_delay_ms", 500)?
            .set_default("display.locale", "en-US")?
            .set_default("display.per_page", 20)?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (SCD__SECTION__KEY)
            .add_source(
                Environment::with_prefix("SCD")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

impl CatalogConfig {
    pub fn generator_options(&self) -> GeneratorOptions {
        GeneratorOptions {
            product_count: self.product_count,
            supplier_count: self.supplier_count,
            order_count: self.order_count,
        }
    }
}

impl SessionConfig {
    pub fn sign_in_delay(&self) -> Duration {
        Duration::from_millis(self.sign_in_delay_ms)
    }

    pub fn sign_out_delay(&self) -> Duration {
        Duration::from_millis(self.sign_out_delay_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            catalog: CatalogConfig::default(),
            session: SessionConfig::default(),
            display: DisplayConfig::default(),
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        let options = GeneratorOptions::default();
        Self {
            seed: None,
            anchor: None,
            product_count: options.product_count,
            supplier_count: options.supplier_count,
            order_count: options.order_count,
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            storage_path: PathBuf::from(".scd/local_storage.json"),
            storage_key: "user".to_string(),
            sign_in_delay_ms: 1000,
            sign_out_delay_ms: 500,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            locale: Locale::EnUs,
            per_page: 20,
        }
    }
}
