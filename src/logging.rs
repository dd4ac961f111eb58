//! Tracing bootstrap.
//!
//! Diagnostics go to stderr so that command output on stdout stays
//! machine-readable (`--json`).

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` takes precedence; otherwise `debug` when `verbose` is set and
/// `warn` by default. Calling this more than once is harmless.
pub fn init(verbose: bool) {
    let filter = if verbose { "debug" } else { "warn" };
    let _ = tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}
