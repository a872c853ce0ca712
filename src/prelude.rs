//! One-stop prelude for application code and embedding.
//!
//! Use `use sedona_connect::prelude::*` to get the most common types and functions.
//! For the typed `ST_*` wrappers, see [`crate::st_functions`].
//! For a minimal FFI/embedding surface, use [`crate::prelude::embed`].

pub mod embed;

pub use crate::column::Column;
pub use crate::config::{FunctionEncoding, SedonaConnectConfig};
pub use crate::error::EngineError;
pub use crate::functions::{array, call_function, col, lit, lit_null};
pub use crate::sedona::{SedonaArg, SedonaFunction, call_sedona_function, call_sedona_function_with};
pub use crate::sedona_args;
pub use crate::{DataType, ExprIr, LiteralValue};
