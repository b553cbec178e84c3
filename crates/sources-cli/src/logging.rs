use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Initialize a stderr tracing subscriber.
///
/// Uses `RUST_LOG` when set, otherwise `debug` with `verbose` and `warn`
/// without. Stdout is reserved for the JSON line, so logs never go there.
pub fn init(verbose: bool) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let default_level = if verbose { "debug" } else { "warn" };

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .compact();

    let filter_layer =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(default_level))?;

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
