//! Session expiration configuration.

use std::collections::HashMap;

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};
use tracing::warn;

use super::AppConfig;

/// Session expiration configuration.
///
/// Both durations are whole seconds; `0` disables the feature.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Seconds a session stays valid after creation. `0` means sessions
    /// never expire. Also settable through the `SESSION_DURATION`
    /// environment variable.
    #[serde(default, deserialize_with = "lenient_seconds")]
    pub duration_seconds: u64,
    /// Seconds between background purges of expired entries. `0` (the
    /// default) leaves expired entries in the table.
    #[serde(default, deserialize_with = "lenient_seconds")]
    pub cleanup_interval_seconds: u64,
}

impl SessionConfig {
    /// Build a configuration with the given session duration.
    pub fn with_duration(duration_seconds: u64) -> Self {
        Self {
            duration_seconds,
            ..Self::default()
        }
    }

    /// Read the session configuration from the configured sources.
    ///
    /// Never fails: when the layered configuration cannot be loaded, the
    /// duration still comes from `SESSION_DURATION` and every other value
    /// falls back to its default.
    pub fn from_env() -> Self {
        Self::from_sources(&super::config_path(), None)
    }

    /// Like [`from_env`](Self::from_env), reading the file at `path` and the
    /// variables in `env` instead of the process environment when given.
    pub fn from_sources(path: &str, env: Option<HashMap<String, String>>) -> Self {
        let legacy_duration = super::legacy_duration(env.as_ref());

        match AppConfig::load_with_env(path, env) {
            Ok(config) => config.session,
            Err(e) => {
                let duration_seconds = legacy_duration.as_deref().map_or(0, parse_seconds);
                warn!(
                    error = %e,
                    duration_seconds,
                    "Configuration could not be loaded, using SESSION_DURATION and defaults"
                );
                Self::with_duration(duration_seconds)
            }
        }
    }

    /// Whether sessions expire at all.
    pub fn expires(&self) -> bool {
        self.duration_seconds > 0
    }
}

/// Parse a seconds value the way `SESSION_DURATION` is interpreted.
///
/// Surrounding whitespace is ignored. Anything that is not an integer, and
/// any negative integer, yields `0`.
pub fn parse_seconds(raw: &str) -> u64 {
    match raw.trim().parse::<i64>() {
        Ok(value) => seconds_from_int(value),
        Err(e) => {
            warn!(value = raw, error = %e, "Invalid seconds value, using 0");
            0
        }
    }
}

fn seconds_from_int(value: i64) -> u64 {
    u64::try_from(value).unwrap_or_else(|_| {
        warn!(value, "Negative seconds value, using 0");
        0
    })
}

fn lenient_seconds<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Int(i64),
        Text(String),
        Other(IgnoredAny),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Int(value) => seconds_from_int(value),
        Raw::Text(text) => parse_seconds(&text),
        Raw::Other(_) => {
            warn!("Unsupported seconds value type, using 0");
            0
        }
    })
}
