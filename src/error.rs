//! Engine error type for embedders.
//!
//! Re-exported from `sedona-connect-core` so bindings depend on a single error type.

pub use sedona_connect_core::EngineError;
