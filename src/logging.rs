//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

use crate::error::AppError;

/// Install the global `fmt` subscriber.
///
/// `RUST_LOG` takes precedence; otherwise `level` is used as the filter.
/// Output goes to stderr so stdout stays free for image data.
///
/// # Errors
///
/// Returns an error if `level` is not a valid filter directive or a global
/// subscriber is already installed.
pub fn init(level: &str) -> Result<(), AppError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(level)
            .map_err(|e| AppError::Config(format!("Invalid log level {level:?}: {e}")))?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| AppError::Config(format!("Failed to install logger: {e}")))
}
