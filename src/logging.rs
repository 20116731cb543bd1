//! Log output for the library and the demo binary.
//!
//! The library only emits `tracing` events. Installing a subscriber is left
//! to the host; these helpers install the default one.

use tracing_subscriber::{EnvFilter, fmt};

/// Installs a formatting subscriber filtered by `RUST_LOG` (default: `info`).
///
/// # Example
/// ```no_run
/// ettv::logging::init();
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_line_number(true)
        .init();
}

/// Installs a `debug` subscriber writing through the test harness.
///
/// Safe to call from every test.
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}
