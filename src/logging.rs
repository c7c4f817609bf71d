use anyhow::Result;
use std::env;
use tracing_subscriber::EnvFilter;

/// Build the log filter. `RUST_LOG` wins over the configured level.
pub fn env_filter(level: &str) -> Result<EnvFilter> {
    let filter = env::var("RUST_LOG")
        .map_or_else(|_| EnvFilter::try_new(level), EnvFilter::try_new)?
        .add_directive("hyper=warn".parse()?)
        .add_directive("sqlx=warn".parse()?);

    Ok(filter)
}

/// Install the global fmt subscriber.
pub fn init(level: &str) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(level)?)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}
