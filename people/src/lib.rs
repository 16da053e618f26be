//! People
//!
//! A plain person value type plus the config and logging glue used by the
//! demo binary.

pub mod config;
pub mod error;
pub mod logging;
pub mod person;

pub use config::DemoConfig;
pub use error::ConfigError;
pub use person::Person;
