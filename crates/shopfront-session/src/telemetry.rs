//! Tracing initialization for embedders.
//!
//! Call [`init_tracing`] once at startup, before issuing any command.
//! Commands log at `debug`, catalog failures at `warn`.

use tracing_subscriber::EnvFilter;

/// Installs the global tracing subscriber.
///
/// Defaults to `info` overall with `debug` for the shopfront crates;
/// override with the standard `RUST_LOG` environment variable.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,shopfront=debug"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
