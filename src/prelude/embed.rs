//! Minimal, stable surface for FFI and embedding crates.
//!
//! Bindings receive function names and JSON-shaped arguments, build the call with
//! [`call_sedona_function_with`], and forward [`Column::to_connect_json`] to their
//! Spark Connect client.

pub use crate::column::Column;
pub use crate::config::{FunctionEncoding, SedonaConnectConfig};
pub use crate::error::EngineError;
pub use crate::sedona::{SedonaArg, call_sedona_function_with};
pub use sedona_connect_core::{from_connect_json, to_connect_json};

use serde_json::Value;

/// Build a Sedona call from JSON arguments and return its Spark Connect payload.
///
/// Arguments are converted with `SedonaArg::try_from`, so strings name columns.
pub fn sedona_call_to_connect_json(
    config: &SedonaConnectConfig,
    function_name: &str,
    args: Vec<Value>,
) -> Result<Value, EngineError> {
    let args = args
        .into_iter()
        .map(SedonaArg::try_from)
        .collect::<Result<Vec<_>, _>>()?;
    let column = call_sedona_function_with(config, function_name, args)?;
    Ok(column.to_connect_json(config))
}
