//! Engine-agnostic expression IR. The root crate's `Column` wraps an [`ExprIr`];
//! the Spark Connect codec in [`crate::connect`] turns it into wire payloads.

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::schema::DataType;

/// Literal value in an expression (engine-agnostic).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LiteralValue {
    /// Typed null; `DataType::Null` for an untyped `NULL`.
    Null(DataType),
    Bool(bool),
    I32(i32),
    I64(i64),
    F32(f32),
    F64(f64),
    Str(String),
    Date(NaiveDate),
    Timestamp(NaiveDateTime),
}

impl LiteralValue {
    pub fn data_type(&self) -> DataType {
        match self {
            LiteralValue::Null(dt) => dt.clone(),
            LiteralValue::Bool(_) => DataType::Boolean,
            LiteralValue::I32(_) => DataType::Integer,
            LiteralValue::I64(_) => DataType::Long,
            LiteralValue::F32(_) => DataType::Float,
            LiteralValue::F64(_) => DataType::Double,
            LiteralValue::Str(_) => DataType::String,
            LiteralValue::Date(_) => DataType::Date,
            LiteralValue::Timestamp(_) => DataType::TimestampNtz,
        }
    }

    /// Integer literal with the narrowest Spark type that holds it:
    /// `int` when the value fits in 32 bits, `bigint` otherwise.
    pub fn from_integer(n: i64) -> Self {
        match i32::try_from(n) {
            Ok(small) => LiteralValue::I32(small),
            Err(_) => LiteralValue::I64(n),
        }
    }
}

impl fmt::Display for LiteralValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LiteralValue::Null(_) => write!(f, "NULL"),
            LiteralValue::Bool(b) => write!(f, "{b}"),
            LiteralValue::I32(n) => write!(f, "{n}"),
            LiteralValue::I64(n) => write!(f, "{n}"),
            // Debug keeps the trailing `.0` on whole numbers.
            LiteralValue::F32(n) => write!(f, "{n:?}"),
            LiteralValue::F64(n) => write!(f, "{n:?}"),
            LiteralValue::Str(s) => write!(f, "{s}"),
            LiteralValue::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            LiteralValue::Timestamp(ts) => {
                write!(f, "{}", ts.format("%Y-%m-%d %H:%M:%S"))?;
                let micros = ts.nanosecond() / 1_000;
                if micros != 0 {
                    write!(f, ".{micros:06}")?;
                }
                Ok(())
            }
        }
    }
}

macro_rules! literal_from {
    ($($ty:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$ty> for LiteralValue {
                fn from(v: $ty) -> Self {
                    LiteralValue::$variant(v)
                }
            }
        )+
    };
}

literal_from!(
    bool => Bool,
    i32 => I32,
    i64 => I64,
    f32 => F32,
    f64 => F64,
    String => Str,
    NaiveDate => Date,
    NaiveDateTime => Timestamp,
);

impl From<&str> for LiteralValue {
    fn from(v: &str) -> Self {
        LiteralValue::Str(v.to_string())
    }
}

/// Expression IR: a single, serializable tree mirroring the Spark Connect
/// `Expression` message for the shapes this crate builds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ExprIr {
    /// Column reference: `col("name")` (unparsed identifier).
    Column(String),
    /// Literal value
    Lit(LiteralValue),
    /// Built-in function resolved by name on the server (e.g. `array`).
    Call {
        name: String,
        args: Vec<ExprIr>,
        is_distinct: bool,
    },
    /// Call of a registered function by name (Sedona `ST_*` functions).
    CallFunction { name: String, args: Vec<ExprIr> },
    /// Expression renamed in the output (`expr AS name`).
    Alias { expr: Box<ExprIr>, name: String },
}

fn fmt_args(f: &mut fmt::Formatter<'_>, args: &[ExprIr]) -> fmt::Result {
    for (i, arg) in args.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{arg}")?;
    }
    Ok(())
}

/// Render `name(arg1, arg2, ...)`, or `name()` with no arguments.
pub fn fmt_call(f: &mut fmt::Formatter<'_>, name: &str, args: &[ExprIr]) -> fmt::Result {
    write!(f, "{name}(")?;
    fmt_args(f, args)?;
    f.write_str(")")
}

impl fmt::Display for ExprIr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExprIr::Column(name) => write!(f, "{name}"),
            ExprIr::Lit(lv) => write!(f, "{lv}"),
            ExprIr::Call {
                name,
                args,
                is_distinct: true,
            } => {
                write!(f, "{name}(distinct ")?;
                fmt_args(f, args)?;
                f.write_str(")")
            }
            ExprIr::Call { name, args, .. } => fmt_call(f, name, args),
            ExprIr::CallFunction { name, args } => fmt_call(f, name, args),
            ExprIr::Alias { expr, name } => write!(f, "{expr} AS {name}"),
        }
    }
}

/// Check that `name` can be sent as a function name: non-empty, made of
/// alphanumerics, `_` and `.` (for qualified names).
pub fn validate_function_name(name: &str) -> Result<(), EngineError> {
    if name.is_empty() {
        return Err(EngineError::User("function name must not be empty".into()));
    }
    if let Some(bad) = name
        .chars()
        .find(|c| !(c.is_alphanumeric() || *c == '_' || *c == '.'))
    {
        return Err(EngineError::User(format!(
            "invalid character {bad:?} in function name '{name}'"
        )));
    }
    Ok(())
}

// ---------- Builder helpers ----------

/// Column reference.
pub fn col(name: &str) -> ExprIr {
    ExprIr::Column(name.to_string())
}

pub fn lit(value: impl Into<LiteralValue>) -> ExprIr {
    ExprIr::Lit(value.into())
}

pub fn lit_null(dtype: DataType) -> ExprIr {
    ExprIr::Lit(LiteralValue::Null(dtype))
}

/// Generic built-in function call.
pub fn call(name: &str, args: Vec<ExprIr>) -> ExprIr {
    ExprIr::Call {
        name: name.to_string(),
        args,
        is_distinct: false,
    }
}

/// `array(e1, e2, ...)` construction.
pub fn array(elements: Vec<ExprIr>) -> ExprIr {
    call("array", elements)
}

/// Named function call (`CallFunction`), no validation.
pub fn call_function(name: &str, args: Vec<ExprIr>) -> ExprIr {
    ExprIr::CallFunction {
        name: name.to_string(),
        args,
    }
}

/// Alias an expression with a new output name.
pub fn alias(expr: ExprIr, name: &str) -> ExprIr {
    ExprIr::Alias {
        expr: Box::new(expr),
        name: name.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_rendering() {
        assert_eq!(lit(10).to_string(), "10");
        assert_eq!(lit(1.0).to_string(), "1.0");
        assert_eq!(lit(2.5f32).to_string(), "2.5");
        assert_eq!(lit(true).to_string(), "true");
        assert_eq!(lit("POINT (1 2)").to_string(), "POINT (1 2)");
        assert_eq!(lit_null(DataType::Null).to_string(), "NULL");
    }

    #[test]
    fn test_date_and_timestamp_rendering() {
        let d = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        assert_eq!(lit(d).to_string(), "2024-03-09");
        let ts = d.and_hms_opt(7, 5, 0).unwrap();
        assert_eq!(lit(ts).to_string(), "2024-03-09 07:05:00");
        let ts_micros = d.and_hms_micro_opt(7, 5, 0, 42).unwrap();
        assert_eq!(lit(ts_micros).to_string(), "2024-03-09 07:05:00.000042");
    }

    #[test]
    fn test_from_integer_picks_narrowest_type() {
        assert_eq!(LiteralValue::from_integer(7), LiteralValue::I32(7));
        assert_eq!(
            LiteralValue::from_integer(i64::from(i32::MAX) + 1),
            LiteralValue::I64(2_147_483_648)
        );
        assert_eq!(LiteralValue::from_integer(-3).data_type(), DataType::Integer);
    }

    #[test]
    fn test_call_rendering() {
        let e = call_function("ST_Buffer", vec![col("geom"), lit(10)]);
        assert_eq!(e.to_string(), "ST_Buffer(geom, 10)");
        assert_eq!(call_function("ST_Foo", vec![]).to_string(), "ST_Foo()");
        assert_eq!(array(vec![lit(1), lit(2)]).to_string(), "array(1, 2)");
        let distinct = ExprIr::Call {
            name: "count".into(),
            args: vec![col("a"), col("b")],
            is_distinct: true,
        };
        assert_eq!(distinct.to_string(), "count(distinct a, b)");
        assert_eq!(alias(col("g"), "geom").to_string(), "g AS geom");
    }

    #[test]
    fn test_validate_function_name() {
        assert!(validate_function_name("ST_Buffer").is_ok());
        assert!(validate_function_name("sedona.ST_Area").is_ok());
        assert!(matches!(
            validate_function_name(""),
            Err(EngineError::User(_))
        ));
        let err = validate_function_name("ST_Buffer(x)").unwrap_err();
        assert!(err.to_string().contains("ST_Buffer(x)"));
    }
}
