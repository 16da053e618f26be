//! People demo
//!
//! Builds one person from the `PEOPLE_*` environment and logs it.

use anyhow::Context;
use people::{logging, DemoConfig};
use tracing::info;

fn main() -> anyhow::Result<()> {
    let config = DemoConfig::from_env().context("failed to load demo configuration")?;

    logging::init(config.log_level).context("failed to initialize logging")?;

    info!("People demo starting...");

    let person = config.person();
    info!(name = person.name(), age = person.age(), "Constructed person");

    Ok(())
}
