//! Error types

use std::num::ParseIntError;

use thiserror::Error;

/// Failure while reading the demo configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid age {value:?}: expected a whole number")]
    InvalidAge {
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("invalid log level {value:?}: expected one of trace, debug, info, warn, error")]
    InvalidLogLevel { value: String },
}
