//! Spark Connect codec: [`ExprIr`] <-> protobuf-JSON form of `spark.connect.Expression`.
//!
//! Field names follow the proto3 JSON mapping (lowerCamelCase, 64-bit integers as
//! strings, non-finite floats as `"NaN"` / `"Infinity"` / `"-Infinity"`).

use chrono::{DateTime, Datelike, NaiveDate};
use serde_json::{Map, Value, json};

use crate::config::FunctionEncoding;
use crate::error::EngineError;
use crate::expr::{ExprIr, LiteralValue};
use crate::schema::DataType;

/// `NaiveDate::num_days_from_ce` of 1970-01-01.
const UNIX_EPOCH_DAYS_FROM_CE: i32 = 719_163;

/// Encode an expression tree as a Spark Connect `Expression` JSON object.
pub fn to_connect_json(expr: &ExprIr, encoding: FunctionEncoding) -> Value {
    match expr {
        ExprIr::Column(name) => json!({
            "unresolvedAttribute": { "unparsedIdentifier": name }
        }),
        ExprIr::Lit(lv) => json!({ "literal": literal_to_json(lv) }),
        ExprIr::Call {
            name,
            args,
            is_distinct,
        } => json!({
            "unresolvedFunction": {
                "functionName": name,
                "arguments": args_to_json(args, encoding),
                "isDistinct": is_distinct,
            }
        }),
        ExprIr::CallFunction { name, args } => match encoding {
            FunctionEncoding::CallFunction => json!({
                "callFunction": {
                    "functionName": name,
                    "arguments": args_to_json(args, encoding),
                }
            }),
            FunctionEncoding::UnresolvedUserDefined => json!({
                "unresolvedFunction": {
                    "functionName": name,
                    "arguments": args_to_json(args, encoding),
                    "isDistinct": false,
                    "isUserDefinedFunction": true,
                }
            }),
        },
        ExprIr::Alias { expr, name } => json!({
            "alias": {
                "expr": to_connect_json(expr, encoding),
                "name": [name],
            }
        }),
    }
}

fn args_to_json(args: &[ExprIr], encoding: FunctionEncoding) -> Vec<Value> {
    args.iter().map(|a| to_connect_json(a, encoding)).collect()
}

fn float_to_json(n: f64) -> Value {
    if n.is_nan() {
        json!("NaN")
    } else if n == f64::INFINITY {
        json!("Infinity")
    } else if n == f64::NEG_INFINITY {
        json!("-Infinity")
    } else {
        json!(n)
    }
}

fn literal_to_json(lv: &LiteralValue) -> Value {
    match lv {
        LiteralValue::Null(dt) => json!({ "null": data_type_to_json(dt) }),
        LiteralValue::Bool(b) => json!({ "boolean": b }),
        LiteralValue::I32(n) => json!({ "integer": n }),
        LiteralValue::I64(n) => json!({ "long": n.to_string() }),
        LiteralValue::F32(n) => json!({ "float": float_to_json(f64::from(*n)) }),
        LiteralValue::F64(n) => json!({ "double": float_to_json(*n) }),
        LiteralValue::Str(s) => json!({ "string": s }),
        LiteralValue::Date(d) => json!({ "date": d.num_days_from_ce() - UNIX_EPOCH_DAYS_FROM_CE }),
        LiteralValue::Timestamp(ts) => json!({
            "timestampNtz": ts.and_utc().timestamp_micros().to_string()
        }),
    }
}

/// Encode a [`DataType`] as a Spark Connect `DataType` JSON object.
pub fn data_type_to_json(dt: &DataType) -> Value {
    match dt {
        DataType::Null => json!({ "null": {} }),
        DataType::Boolean => json!({ "boolean": {} }),
        DataType::Integer => json!({ "integer": {} }),
        DataType::Long => json!({ "long": {} }),
        DataType::Float => json!({ "float": {} }),
        DataType::Double => json!({ "double": {} }),
        DataType::String => json!({ "string": {} }),
        DataType::Date => json!({ "date": {} }),
        DataType::TimestampNtz => json!({ "timestampNtz": {} }),
        DataType::Array(inner) => json!({
            "array": {
                "elementType": data_type_to_json(inner),
                "containsNull": true,
            }
        }),
    }
}

// ---------- Decoding ----------

fn plan_err(msg: impl Into<String>) -> EngineError {
    EngineError::Plan(msg.into())
}

/// Split a oneof-style JSON object (`{"kind": {...}}`) into its single key and body.
fn single_entry<'a>(v: &'a Value, what: &str) -> Result<(&'a str, &'a Value), EngineError> {
    let obj = v
        .as_object()
        .ok_or_else(|| plan_err(format!("{what} must be a JSON object")))?;
    let mut entries = obj.iter();
    match (entries.next(), entries.next()) {
        (Some((k, body)), None) => Ok((k.as_str(), body)),
        _ => Err(plan_err(format!(
            "{what} must have exactly one field, got {}",
            obj.len()
        ))),
    }
}

fn body_obj<'a>(body: &'a Value, kind: &str) -> Result<&'a Map<String, Value>, EngineError> {
    body.as_object()
        .ok_or_else(|| plan_err(format!("'{kind}' body must be a JSON object")))
}

fn required_str<'a>(
    obj: &'a Map<String, Value>,
    field: &str,
    kind: &str,
) -> Result<&'a str, EngineError> {
    obj.get(field)
        .and_then(Value::as_str)
        .ok_or_else(|| plan_err(format!("'{kind}' requires string field '{field}'")))
}

fn arguments_from(obj: &Map<String, Value>, kind: &str) -> Result<Vec<ExprIr>, EngineError> {
    match obj.get("arguments") {
        None => Ok(Vec::new()),
        Some(Value::Array(items)) => items.iter().map(from_connect_json).collect(),
        Some(_) => Err(plan_err(format!("'{kind}.arguments' must be an array"))),
    }
}

/// Decode a Spark Connect `Expression` JSON object into [`ExprIr`].
///
/// Only the shapes produced by [`to_connect_json`] are understood; anything else
/// is an [`EngineError::Plan`].
pub fn from_connect_json(v: &Value) -> Result<ExprIr, EngineError> {
    let (kind, body) = single_entry(v, "expression")?;
    match kind {
        "unresolvedAttribute" => {
            let obj = body_obj(body, kind)?;
            Ok(ExprIr::Column(
                required_str(obj, "unparsedIdentifier", kind)?.to_string(),
            ))
        }
        "literal" => Ok(ExprIr::Lit(literal_from_json(body)?)),
        "unresolvedFunction" => {
            let obj = body_obj(body, kind)?;
            let name = required_str(obj, "functionName", kind)?.to_string();
            let args = arguments_from(obj, kind)?;
            let flag = |field: &str| obj.get(field).and_then(Value::as_bool).unwrap_or(false);
            if flag("isUserDefinedFunction") {
                Ok(ExprIr::CallFunction { name, args })
            } else {
                Ok(ExprIr::Call {
                    name,
                    args,
                    is_distinct: flag("isDistinct"),
                })
            }
        }
        "callFunction" => {
            let obj = body_obj(body, kind)?;
            Ok(ExprIr::CallFunction {
                name: required_str(obj, "functionName", kind)?.to_string(),
                args: arguments_from(obj, kind)?,
            })
        }
        "alias" => {
            let obj = body_obj(body, kind)?;
            let inner = obj
                .get("expr")
                .ok_or_else(|| plan_err("'alias' requires 'expr'"))?;
            let name = match obj.get("name").and_then(Value::as_array).map(Vec::as_slice) {
                Some([Value::String(n)]) => n.clone(),
                _ => return Err(plan_err("'alias.name' must be a single-element string array")),
            };
            Ok(ExprIr::Alias {
                expr: Box::new(from_connect_json(inner)?),
                name,
            })
        }
        other => Err(plan_err(format!("unsupported expression type '{other}'"))),
    }
}

fn json_i64(v: &Value, kind: &str) -> Result<i64, EngineError> {
    let n = match v {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.parse().ok(),
        _ => None,
    };
    n.ok_or_else(|| plan_err(format!("literal '{kind}' must be an integer")))
}

fn json_f64(v: &Value, kind: &str) -> Result<f64, EngineError> {
    let n = match v {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => match s.as_str() {
            "NaN" => Some(f64::NAN),
            "Infinity" => Some(f64::INFINITY),
            "-Infinity" => Some(f64::NEG_INFINITY),
            _ => None,
        },
        _ => None,
    };
    n.ok_or_else(|| plan_err(format!("literal '{kind}' must be a number")))
}

fn literal_from_json(v: &Value) -> Result<LiteralValue, EngineError> {
    let (kind, body) = single_entry(v, "literal")?;
    Ok(match kind {
        "null" => LiteralValue::Null(data_type_from_json(body)?),
        "boolean" => LiteralValue::Bool(
            body.as_bool()
                .ok_or_else(|| plan_err("literal 'boolean' must be a bool"))?,
        ),
        "integer" => {
            let n = json_i64(body, kind)?;
            LiteralValue::I32(
                i32::try_from(n)
                    .map_err(|_| plan_err(format!("literal 'integer' out of range: {n}")))?,
            )
        }
        "long" => LiteralValue::I64(json_i64(body, kind)?),
        // f32 literals are encoded from their exact f64 widening.
        "float" => LiteralValue::F32(json_f64(body, kind)? as f32),
        "double" => LiteralValue::F64(json_f64(body, kind)?),
        "string" => LiteralValue::Str(
            body.as_str()
                .ok_or_else(|| plan_err("literal 'string' must be a string"))?
                .to_string(),
        ),
        "date" => {
            let days = json_i64(body, kind)?;
            let date = i32::try_from(days)
                .ok()
                .and_then(|d| d.checked_add(UNIX_EPOCH_DAYS_FROM_CE))
                .and_then(NaiveDate::from_num_days_from_ce_opt)
                .ok_or_else(|| plan_err(format!("literal 'date' out of range: {days}")))?;
            LiteralValue::Date(date)
        }
        "timestampNtz" => {
            let micros = json_i64(body, kind)?;
            let ts = DateTime::from_timestamp_micros(micros)
                .ok_or_else(|| plan_err(format!("literal 'timestampNtz' out of range: {micros}")))?;
            LiteralValue::Timestamp(ts.naive_utc())
        }
        other => return Err(plan_err(format!("unsupported literal type '{other}'"))),
    })
}

/// Decode a Spark Connect `DataType` JSON object.
pub fn data_type_from_json(v: &Value) -> Result<DataType, EngineError> {
    let (kind, body) = single_entry(v, "data type")?;
    Ok(match kind {
        "null" => DataType::Null,
        "boolean" => DataType::Boolean,
        "integer" => DataType::Integer,
        "long" => DataType::Long,
        "float" => DataType::Float,
        "double" => DataType::Double,
        "string" => DataType::String,
        "date" => DataType::Date,
        "timestampNtz" => DataType::TimestampNtz,
        "array" => {
            let element = body_obj(body, kind)?
                .get("elementType")
                .ok_or_else(|| plan_err("'array' data type requires 'elementType'"))?;
            DataType::Array(Box::new(data_type_from_json(element)?))
        }
        other => return Err(plan_err(format!("unsupported data type '{other}'"))),
    })
}
