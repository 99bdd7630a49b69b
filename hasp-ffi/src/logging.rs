//! Tracing subscriber setup for embedding hosts.

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info";

/// Installs the global fmt subscriber.
///
/// `filter` takes `EnvFilter` directives; without it `RUST_LOG` is used,
/// falling back to `info`. Returns `false` if the directives are invalid or a
/// subscriber is already installed.
pub fn init_logging(filter: Option<&str>) -> bool {
    let filter = match filter {
        Some(directives) => match EnvFilter::try_new(directives) {
            Ok(f) => f,
            Err(_) => return false,
        },
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .try_init()
        .is_ok()
}
