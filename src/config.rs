//! Configuration for building and encoding Sedona function calls.
//!
//! Use [`SedonaConnectConfig`] from code or [`SedonaConnectConfig::from_env`], then pass it to
//! [`call_sedona_function_with`](crate::call_sedona_function_with) and
//! [`Column::to_connect_json`](crate::Column::to_connect_json).

pub use sedona_connect_core::{FunctionEncoding, SedonaConnectConfig};
