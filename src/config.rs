use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Client configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub services: ServiceSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// Base URLs of the three remote services
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceSettings {
    pub users_url: String,
    pub preferences_url: String,
    pub listings_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Configuration file (config/default.toml)
    /// 2. Local configuration file (config/local.toml)
    /// 3. Environment variables (prefixed with NEST_), `.env` included
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present
        dotenv::dotenv().ok();

        Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., NEST__SERVICES__USERS_URL -> services.users_url
            .add_source(env_source())
            .build()?
            .try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(env_source())
            .build()?
            .try_deserialize()
    }
}

fn env_source() -> Environment {
    Environment::with_prefix("NEST")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}
