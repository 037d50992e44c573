//! API configuration

use std::collections::HashMap;

use config::{Config, ConfigError, Environment};
use serde::Deserialize;

/// Default location of fund-house logo images
pub const DEFAULT_AMC_LOGO_BASE_URL: &str = "https://ik.imagekit.io/cowboypanda/AMC";

/// API configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Database URL
    pub database_url: String,
    /// Require TLS on database connections
    pub database_ssl: bool,
    /// Base URL under which `{fund_house}.png` logos are served
    pub amc_logo_base_url: String,
    /// Log level
    pub log_level: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            database_url: "postgres://localhost/funds".to_string(),
            database_ssl: false,
            amc_logo_base_url: DEFAULT_AMC_LOGO_BASE_URL.to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl ApiConfig {
    /// Loads configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(std::env::vars().collect())
    }

    /// Loads configuration from a set of environment variables
    ///
    /// `API_`-prefixed variables take precedence. `DATABASE_URL`,
    /// `DATABASE_SSL` and `AMC_LOGO_BASE_URL` are read as fallbacks, and
    /// `APP_ENV=production` turns on TLS unless `DATABASE_SSL` says otherwise.
    pub fn from_vars(vars: HashMap<String, String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let production = vars
            .get("APP_ENV")
            .is_some_and(|env| env.eq_ignore_ascii_case("production"));
        let database_ssl = vars
            .get("DATABASE_SSL")
            .map(|flag| parse_flag(flag))
            .unwrap_or(production);
        let database_url = vars
            .get("DATABASE_URL")
            .cloned()
            .unwrap_or(defaults.database_url);
        let amc_logo_base_url = vars
            .get("AMC_LOGO_BASE_URL")
            .cloned()
            .unwrap_or(defaults.amc_logo_base_url);

        Config::builder()
            .set_default("host", defaults.host)?
            .set_default("port", i64::from(defaults.port))?
            .set_default("database_url", database_url)?
            .set_default("database_ssl", database_ssl)?
            .set_default("amc_logo_base_url", amc_logo_base_url)?
            .set_default("log_level", defaults.log_level)?
            .add_source(
                Environment::with_prefix("API")
                    .try_parsing(true)
                    .source(Some(vars)),
            )
            .build()?
            .try_deserialize()
    }

    /// Returns the server address
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(value.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on")
}
