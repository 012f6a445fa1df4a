use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Env var consulted after `RUST_LOG` for the log filter.
pub const LOG_ENV: &str = "EXECUTOR_LOG";

const DEFAULT_FILTER: &str = "executor=info";

/// Initialize structured logging on stderr; stdout is kept for results.
pub fn init_tracing() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_from_env(LOG_ENV))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .try_init()?;

    Ok(())
}
