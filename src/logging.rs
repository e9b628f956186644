//! Tracing subscriber setup for the binary.

use tracing_subscriber::EnvFilter;

/// Install a console subscriber. `RUST_LOG` takes precedence over `level`.
///
/// Calling this more than once is harmless; later calls are ignored.
pub fn init(level: &str) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let installed = tracing_subscriber::fmt()
        .with_target(true)
        .with_thread_ids(true)
        .with_env_filter(env_filter)
        .try_init()
        .is_ok();

    if installed {
        tracing::debug!("Logging initialized: level={}", level);
    }
}
