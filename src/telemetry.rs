//! Logging initialisation for the server binary.

use tracing_subscriber::{EnvFilter, filter::ParseError};

/// Installs a compact `fmt` subscriber.
///
/// `RUST_LOG` takes precedence; `default_level` is used when it is unset or
/// unparsable.
///
/// # Errors
///
/// Returns [`ParseError`] when `default_level` is not a valid filter
/// directive.
pub fn init_logging(default_level: &str) -> Result<(), ParseError> {
    let filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(default_level))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
    Ok(())
}
