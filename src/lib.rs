//! sedona-connect - Apache Sedona function calls as Spark Connect column expressions
//!
//! Build `ST_*` calls from columns, column names, sequences and literals, render
//! them the way Spark displays built-in function calls, and encode them as Spark
//! Connect `Expression` payloads.

pub mod column;
pub mod config;
pub mod error;
pub mod functions;
pub mod prelude;
pub mod sedona;
pub mod st_functions;

pub use column::Column;
pub use config::{FunctionEncoding, SedonaConnectConfig};
pub use error::EngineError;
pub use functions::*;
pub use sedona::{
    SedonaArg, SedonaFunction, call_sedona_function, call_sedona_function_with, to_connect_column,
};
pub use sedona_connect_core::{DataType, ExprIr, LiteralValue};
