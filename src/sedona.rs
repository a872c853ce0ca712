//! Sedona function calls as Spark Connect columns.
//!
//! Arguments follow the same conventions as Sedona's Python API: a [`Column`] is
//! passed through, a string names a column, a sequence becomes `array(...)` and
//! anything else is a literal. Build calls with [`call_sedona_function`]:
//!
//! ```
//! use sedona_connect::{call_sedona_function, col, sedona_args};
//!
//! let buffered = call_sedona_function("ST_Buffer", sedona_args![col("geom"), 10]).unwrap();
//! assert_eq!(buffered.expr().to_string(), "ST_Buffer(geom, 10)");
//! ```

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};
use sedona_connect_core::expr::{fmt_call, validate_function_name};
use sedona_connect_core::{DataType, EngineError, ExprIr, LiteralValue, SedonaConnectConfig};
use serde_json::Value;

use crate::column::Column;
use crate::functions::{array, col, lit};

/// One raw argument to a Sedona function, before normalization.
#[derive(Debug, Clone, PartialEq)]
pub enum SedonaArg {
    /// An existing column, passed through unchanged.
    Column(Column),
    /// A column referenced by name.
    Name(String),
    /// A sequence of arguments, built into `array(...)`.
    Array(Vec<SedonaArg>),
    /// Any other scalar, passed to `lit`.
    Literal(LiteralValue),
}

impl From<Column> for SedonaArg {
    fn from(c: Column) -> Self {
        SedonaArg::Column(c)
    }
}

impl From<&Column> for SedonaArg {
    fn from(c: &Column) -> Self {
        SedonaArg::Column(c.clone())
    }
}

impl From<&str> for SedonaArg {
    fn from(name: &str) -> Self {
        SedonaArg::Name(name.to_string())
    }
}

impl From<String> for SedonaArg {
    fn from(name: String) -> Self {
        SedonaArg::Name(name)
    }
}

impl From<&String> for SedonaArg {
    fn from(name: &String) -> Self {
        SedonaArg::Name(name.clone())
    }
}

impl From<LiteralValue> for SedonaArg {
    fn from(v: LiteralValue) -> Self {
        SedonaArg::Literal(v)
    }
}

macro_rules! literal_arg_from {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl From<$ty> for SedonaArg {
                fn from(v: $ty) -> Self {
                    SedonaArg::Literal(LiteralValue::from(v))
                }
            }
        )+
    };
}

literal_arg_from!(bool, i32, i64, f32, f64, NaiveDate, NaiveDateTime);

impl<T: Into<SedonaArg>> From<Vec<T>> for SedonaArg {
    fn from(items: Vec<T>) -> Self {
        SedonaArg::Array(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<SedonaArg>, const N: usize> From<[T; N]> for SedonaArg {
    fn from(items: [T; N]) -> Self {
        SedonaArg::Array(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Clone + Into<SedonaArg>> From<&[T]> for SedonaArg {
    fn from(items: &[T]) -> Self {
        SedonaArg::Array(items.iter().cloned().map(Into::into).collect())
    }
}

/// `None` is an untyped `NULL` literal.
impl<T: Into<SedonaArg>> From<Option<T>> for SedonaArg {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(inner) => inner.into(),
            None => SedonaArg::Literal(LiteralValue::Null(DataType::Null)),
        }
    }
}

/// Dynamic arguments (e.g. from a JSON request): strings name columns, arrays
/// become `array(...)`, numbers/bools/null are literals. An object iterates its
/// keys, so it becomes an `array(...)` of the key columns in insertion order.
impl TryFrom<Value> for SedonaArg {
    type Error = EngineError;

    fn try_from(v: Value) -> Result<Self, Self::Error> {
        Ok(match v {
            Value::Null => SedonaArg::Literal(LiteralValue::Null(DataType::Null)),
            Value::Bool(b) => SedonaArg::Literal(LiteralValue::Bool(b)),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    SedonaArg::Literal(LiteralValue::from_integer(i))
                } else if n.is_u64() {
                    return Err(EngineError::User(format!(
                        "unsupported literal: integer {n} does not fit in bigint"
                    )));
                } else {
                    let f = n.as_f64().ok_or_else(|| {
                        EngineError::User(format!("unsupported literal: number {n}"))
                    })?;
                    SedonaArg::Literal(LiteralValue::F64(f))
                }
            }
            Value::String(s) => SedonaArg::Name(s),
            Value::Array(items) => SedonaArg::Array(
                items
                    .into_iter()
                    .map(SedonaArg::try_from)
                    .collect::<Result<_, _>>()?,
            ),
            Value::Object(map) => {
                SedonaArg::Array(map.into_iter().map(|(k, _)| SedonaArg::Name(k)).collect())
            }
        })
    }
}

/// Build a `Vec<SedonaArg>` from mixed argument kinds.
///
/// ```
/// use sedona_connect::{col, sedona_args, SedonaArg};
///
/// let args = sedona_args![col("geom"), "other_geom", 2.5, vec![1, 2]];
/// assert!(matches!(args[1], SedonaArg::Name(_)));
/// ```
#[macro_export]
macro_rules! sedona_args {
    ($($arg:expr),* $(,)?) => {{
        let args: ::std::vec::Vec<$crate::SedonaArg> =
            ::std::vec![$($crate::SedonaArg::from($arg)),*];
        args
    }};
}

/// Normalize one raw argument into a column.
///
/// Matches in order: column (unchanged), name (`col`), sequence (`array` of the
/// normalized elements), literal (`lit`). A string is never split into characters.
pub fn to_connect_column(arg: impl Into<SedonaArg>) -> Column {
    match arg.into() {
        SedonaArg::Column(c) => {
            tracing::trace!(kind = "column", expr = %c.expr(), "sedona argument");
            c
        }
        SedonaArg::Name(name) => {
            tracing::trace!(kind = "name", %name, "sedona argument");
            col(&name)
        }
        SedonaArg::Array(items) => {
            tracing::trace!(kind = "array", len = items.len(), "sedona argument");
            array(items.into_iter().map(to_connect_column))
        }
        SedonaArg::Literal(v) => {
            tracing::trace!(
                kind = "literal",
                value = %v,
                dtype = %v.data_type().simple_string(),
                "sedona argument"
            );
            lit(v)
        }
    }
}

/// A call of a Sedona SQL function over already-normalized argument expressions.
///
/// Renders as `name(arg1, arg2, ...)`, the same way built-in function calls are
/// displayed, and encodes as a Spark Connect `CallFunction`.
#[derive(Debug, Clone, PartialEq)]
pub struct SedonaFunction {
    name: String,
    args: Vec<ExprIr>,
}

impl SedonaFunction {
    pub fn new(name: impl Into<String>, args: Vec<ExprIr>) -> Self {
        SedonaFunction {
            name: name.into(),
            args,
        }
    }

    /// Like [`new`](Self::new), rejecting names that cannot be sent as a function name.
    pub fn try_new(name: impl Into<String>, args: Vec<ExprIr>) -> Result<Self, EngineError> {
        let name = name.into();
        validate_function_name(&name)?;
        Ok(SedonaFunction::new(name, args))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn args(&self) -> &[ExprIr] {
        &self.args
    }

    pub fn into_column(self) -> Column {
        Column::from_expr(self.into())
    }
}

impl fmt::Display for SedonaFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_call(f, &self.name, &self.args)
    }
}

impl From<SedonaFunction> for ExprIr {
    fn from(func: SedonaFunction) -> Self {
        ExprIr::CallFunction {
            name: func.name,
            args: func.args,
        }
    }
}

/// Build a column calling the Sedona function `function_name` with `args`,
/// using the default [`SedonaConnectConfig`].
pub fn call_sedona_function<I>(function_name: &str, args: I) -> Result<Column, EngineError>
where
    I: IntoIterator,
    I::Item: Into<SedonaArg>,
{
    call_sedona_function_with(&SedonaConnectConfig::default(), function_name, args)
}

/// [`call_sedona_function`] with an explicit config.
pub fn call_sedona_function_with<I>(
    config: &SedonaConnectConfig,
    function_name: &str,
    args: I,
) -> Result<Column, EngineError>
where
    I: IntoIterator,
    I::Item: Into<SedonaArg>,
{
    let exprs: Vec<ExprIr> = args
        .into_iter()
        .map(|a| to_connect_column(a).into_expr())
        .collect();
    let function = if config.validate_function_names {
        SedonaFunction::try_new(function_name, exprs)?
    } else {
        SedonaFunction::new(function_name, exprs)
    };
    tracing::debug!(
        function = function.name(),
        arg_count = function.args().len(),
        "built sedona function call"
    );
    Ok(function.into_column())
}
