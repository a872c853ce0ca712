//! Shared helpers for integration tests (tracing setup and sample columns).

#![allow(dead_code)]

use sedona_connect::{Column, col};
use tracing_subscriber::EnvFilter;

/// Install a test subscriber once; honors `RUST_LOG` (e.g. `RUST_LOG=sedona_connect=trace`).
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Geometry column used across tests.
pub fn geom() -> Column {
    col("geom")
}
