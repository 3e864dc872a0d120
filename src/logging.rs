//! Console logging for the scripts

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Compact output on stderr filtered by `RUST_LOG`, `info` when unset. Results go to stdout.
///
/// Safe to call more than once; only the first call installs the subscriber.
pub fn init() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .try_init();
}
