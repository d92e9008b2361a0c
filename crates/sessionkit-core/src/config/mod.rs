//! Application configuration schemas.
//!
//! Configuration is layered with the `config` crate: an optional TOML file,
//! then `SESSIONKIT__`-prefixed environment variables, then the legacy
//! `SESSION_DURATION` variable.

pub mod logging;
pub mod session;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

pub use self::logging::LoggingConfig;
pub use self::session::{SessionConfig, parse_seconds};

/// Environment variable naming the configuration file.
pub const CONFIG_PATH_VAR: &str = "SESSIONKIT_CONFIG";

/// Legacy environment variable holding the session duration in seconds.
pub const SESSION_DURATION_VAR: &str = "SESSION_DURATION";

const DEFAULT_CONFIG_PATH: &str = "config/default";

/// Root application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Session expiration settings.
    #[serde(default)]
    pub session: SessionConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from `path` and the process environment.
    ///
    /// A missing file is not an error; every value has a default.
    pub fn load(path: &str) -> Result<Self, AppError> {
        Self::load_with_env(path, None)
    }

    /// Load configuration from `path`, reading environment variables from
    /// `env` instead of the process environment when it is given.
    pub fn load_with_env(
        path: &str,
        env: Option<HashMap<String, String>>,
    ) -> Result<Self, AppError> {
        let legacy_duration = legacy_duration(env.as_ref());

        let config = config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(
                config::Environment::with_prefix("SESSIONKIT")
                    .separator("__")
                    .source(env.map(|vars| vars.into_iter().collect())),
            )
            .set_override_option("session.duration_seconds", legacy_duration)?
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }
}

/// Path of the configuration file, from `SESSIONKIT_CONFIG` or the default.
pub fn config_path() -> String {
    std::env::var(CONFIG_PATH_VAR).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string())
}

/// Raw `SESSION_DURATION` value, from `env` when given.
fn legacy_duration(env: Option<&HashMap<String, String>>) -> Option<String> {
    match env {
        Some(vars) => vars.get(SESSION_DURATION_VAR).cloned(),
        None => std::env::var(SESSION_DURATION_VAR).ok(),
    }
}
