use std::io;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let stdin = io::stdin();
    let stdout = io::stdout();
    pickup_router::run(stdin.lock(), stdout.lock())
        .context("failed to plan pickup trips from stdin")?;

    Ok(())
}
