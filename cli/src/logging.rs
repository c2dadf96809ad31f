//! Diagnostics on stderr, kept apart from the game itself on stdout.
//!
//! The level comes from the `-v`/`-q` flags and `RUST_LOG` can refine it, e.g.
//! `RUST_LOG=hatfield_core=trace` to see discarded fields.

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Installs the global subscriber, `log` records from the core crate are forwarded to it.
pub fn init(level: LevelFilter) {
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
