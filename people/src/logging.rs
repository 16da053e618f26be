//! Tracing setup

use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Install a global fmt subscriber capped at `level`.
///
/// Fails if a global subscriber has already been set.
pub fn init(level: Level) -> anyhow::Result<()> {
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_only_once() {
        // Only test in this binary that installs a global subscriber
        assert!(init(Level::DEBUG).is_ok());
        assert!(init(Level::INFO).is_err());
    }
}
