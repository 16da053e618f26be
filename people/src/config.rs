//! Demo configuration
//!
//! Read from `PEOPLE_*` environment variables. Anything unset falls back to
//! the defaults below.

use std::env;

use tracing::Level;

use crate::error::ConfigError;
use crate::person::Person;

pub const NAME_VAR: &str = "PEOPLE_NAME";
pub const AGE_VAR: &str = "PEOPLE_AGE";
pub const LOG_LEVEL_VAR: &str = "PEOPLE_LOG_LEVEL";

pub const DEFAULT_NAME: &str = "Alice";
pub const DEFAULT_AGE: i32 = 30;
pub const DEFAULT_LOG_LEVEL: Level = Level::INFO;

#[derive(Debug, Clone)]
pub struct DemoConfig {
    pub name: String,
    pub age: i32,
    pub log_level: Level,
}

impl DemoConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup.
    ///
    /// The name is taken as-is, empty strings included. Age and log level are
    /// trimmed before parsing. Log levels are accepted by name only.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(name) = lookup(NAME_VAR) {
            config.name = name;
        }

        if let Some(raw) = lookup(AGE_VAR) {
            config.age = raw
                .trim()
                .parse::<i32>()
                .map_err(|source| ConfigError::InvalidAge { value: raw.clone(), source })?;
        }

        if let Some(raw) = lookup(LOG_LEVEL_VAR) {
            config.log_level = parse_level(&raw)
                .ok_or_else(|| ConfigError::InvalidLogLevel { value: raw.clone() })?;
        }

        Ok(config)
    }

    pub fn person(&self) -> Person {
        Person::new(self.name.clone(), self.age)
    }
}

// `Level`'s own parser also takes "1" through "5"
fn parse_level(raw: &str) -> Option<Level> {
    let raw = raw.trim();
    if raw.is_empty() || raw.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    raw.parse::<Level>().ok()
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            age: DEFAULT_AGE,
            log_level: DEFAULT_LOG_LEVEL,
        }
    }
}
