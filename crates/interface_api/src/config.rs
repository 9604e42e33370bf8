//! API configuration

use serde::Deserialize;

use core_kernel::AdapterSource;
use infra_db::DEFAULT_DATABASE_URL;

/// Prefix of the environment variables read by [`ApiConfig::from_env`]
pub const ENV_PREFIX: &str = "CLUBS";

/// API configuration
///
/// Every field can be set from a `CLUBS_`-prefixed environment variable,
/// e.g. `CLUBS_PORT=9000` or `CLUBS_STORE=mock`.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    pub host: String,
    pub port: u16,
    /// PostgreSQL connection string, used when `store` is `internal`
    pub database_url: String,
    /// Default log filter when `RUST_LOG` is not set
    pub log_level: String,
    /// Which adapters back the ports
    pub store: AdapterSource,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            database_url: DEFAULT_DATABASE_URL.to_string(),
            log_level: "info".to_string(),
            store: AdapterSource::Internal,
        }
    }
}

impl ApiConfig {
    /// Loads configuration from the environment, falling back to the defaults
    pub fn from_env() -> Result<Self, config::ConfigError> {
        let defaults = Self::default();
        config::Config::builder()
            .set_default("host", defaults.host)?
            .set_default("port", i64::from(defaults.port))?
            .set_default("database_url", defaults.database_url)?
            .set_default("log_level", defaults.log_level)?
            .set_default("store", "internal")?
            .add_source(config::Environment::with_prefix(ENV_PREFIX))
            .build()?
            .try_deserialize()
    }

    /// Returns the server address
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
