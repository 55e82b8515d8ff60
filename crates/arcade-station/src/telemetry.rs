//! # Telemetry
//!
//! Tracing setup for binaries embedding the station.
//!
//! Library code only emits events; installing a subscriber is the
//! embedding shell's call, made once at startup.

use tracing_subscriber::EnvFilter;

/// Installs the global fmt subscriber.
///
/// Default filter: `info` overall, `debug` for the arcade crates.
/// Override with `RUST_LOG` as usual.
///
/// ## Panics
/// Panics if a global subscriber is already installed; call once.
pub fn init() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,arcade_core=debug,arcade_station=debug"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
