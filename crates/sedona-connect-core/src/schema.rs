//! Data types carried by literals (typed nulls, array element types).

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Spark SQL data types that a literal expression can carry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DataType {
    Null,
    Boolean,
    Integer,
    Long,
    Float,
    Double,
    String,
    Date,
    TimestampNtz,
    Array(Box<DataType>),
}

impl DataType {
    /// Spark's `simpleString` form, e.g. `int`, `bigint`, `array<double>`.
    pub fn simple_string(&self) -> String {
        match self {
            DataType::Null => "void".to_string(),
            DataType::Boolean => "boolean".to_string(),
            DataType::Integer => "int".to_string(),
            DataType::Long => "bigint".to_string(),
            DataType::Float => "float".to_string(),
            DataType::Double => "double".to_string(),
            DataType::String => "string".to_string(),
            DataType::Date => "date".to_string(),
            DataType::TimestampNtz => "timestamp_ntz".to_string(),
            DataType::Array(inner) => format!("array<{}>", inner.simple_string()),
        }
    }
}

/// Parse a PySpark-like type name into a [`DataType`].
///
/// Accepts the common aliases (`int`/`integer`, `long`/`bigint`, `str`/`string`, ...)
/// and nested `array<...>` forms. Matching is case-insensitive.
pub fn parse_type_name(name: &str) -> Result<DataType, EngineError> {
    let s = name.trim().to_lowercase();
    if let Some(inner) = s.strip_prefix("array<").and_then(|r| r.strip_suffix('>')) {
        return Ok(DataType::Array(Box::new(parse_type_name(inner)?)));
    }
    Ok(match s.as_str() {
        "void" | "null" => DataType::Null,
        "boolean" | "bool" => DataType::Boolean,
        "int" | "integer" => DataType::Integer,
        "long" | "bigint" => DataType::Long,
        "float" | "real" => DataType::Float,
        "double" => DataType::Double,
        "string" | "str" => DataType::String,
        "date" => DataType::Date,
        "timestamp_ntz" | "timestamp" => DataType::TimestampNtz,
        _ => return Err(EngineError::User(format!("unknown type name: {name}"))),
    })
}
