//! sedona-connect core: expression IR, literal types, config, error and the
//! Spark Connect JSON codec (no client or transport dependency).

pub mod config;
pub mod connect;
pub mod error;
pub mod expr;
pub mod schema;

pub use config::{FunctionEncoding, SedonaConnectConfig};
pub use connect::{from_connect_json, to_connect_json};
pub use error::EngineError;
pub use expr::{ExprIr, LiteralValue};
pub use schema::{DataType, parse_type_name};
