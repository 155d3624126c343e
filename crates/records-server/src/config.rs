//! Server configuration
//!
//! Values come from built-in defaults, overridden by `RECORDS_*`
//! environment variables (e.g. `RECORDS_BIND_ADDRESS=127.0.0.1:9000`).

use config::{ConfigError, Environment};
use serde::Deserialize;

pub const ENV_PREFIX: &str = "RECORDS";
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8000";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Address the HTTP listener binds to
    pub bind_address: String,
    /// Start with the built-in seed records instead of an empty store
    pub seed: bool,
}

impl Config {
    /// Load configuration from the process environment
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_env(Environment::with_prefix(ENV_PREFIX))
    }

    fn from_env(env: Environment) -> Result<Self, ConfigError> {
        config::Config::builder()
            .set_default("bind_address", DEFAULT_BIND_ADDRESS)?
            .set_default("seed", true)?
            .add_source(env.try_parsing(true))
            .build()?
            .try_deserialize()
    }
}
