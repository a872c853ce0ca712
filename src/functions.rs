//! Column builders: column references, literals, arrays and named function calls.

use sedona_connect_core::{EngineError, LiteralValue, expr, parse_type_name};

use crate::column::Column;

/// Get a column by name
pub fn col(name: &str) -> Column {
    Column::new(name.to_string())
}

/// Create a literal column from a value
pub fn lit(value: impl Into<LiteralValue>) -> Column {
    Column::from_expr(expr::lit(value))
}

pub fn lit_i32(value: i32) -> Column {
    lit(value)
}

pub fn lit_i64(value: i64) -> Column {
    lit(value)
}

pub fn lit_f64(value: f64) -> Column {
    lit(value)
}

pub fn lit_bool(value: bool) -> Column {
    lit(value)
}

pub fn lit_str(value: &str) -> Column {
    lit(value)
}

/// Typed null literal column. Returns `Err` on unknown type name.
/// See [`parse_type_name`] for supported type strings (e.g. `"boolean"`, `"string"`, `"array<double>"`).
pub fn lit_null(dtype: &str) -> Result<Column, EngineError> {
    Ok(Column::from_expr(expr::lit_null(parse_type_name(dtype)?)))
}

/// `array(c1, c2, ...)`: build an array value from element columns, in order.
pub fn array<I>(cols: I) -> Column
where
    I: IntoIterator,
    I::Item: Into<Column>,
{
    let elements = cols.into_iter().map(|c| c.into().into_expr()).collect();
    Column::from_expr(expr::array(elements))
}

/// Call a function registered on the server by name (`CallFunction`).
///
/// Fails with [`EngineError::User`] when `name` is not a plain or dotted identifier.
pub fn call_function<I>(name: &str, cols: I) -> Result<Column, EngineError>
where
    I: IntoIterator,
    I::Item: Into<Column>,
{
    expr::validate_function_name(name)?;
    let args = cols.into_iter().map(|c| c.into().into_expr()).collect();
    Ok(Column::from_expr(expr::call_function(name, args)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use sedona_connect_core::{DataType, ExprIr};

    #[test]
    fn test_col_and_lit() {
        assert_eq!(col("geom").into_expr(), ExprIr::Column("geom".into()));
        assert_eq!(lit_i32(3).into_expr(), ExprIr::Lit(LiteralValue::I32(3)));
        assert_eq!(lit_str("x").to_string(), "Column<'x'>");
    }

    #[test]
    fn test_lit_null_typed() {
        let c = lit_null("array<double>").unwrap();
        assert_eq!(
            c.into_expr(),
            ExprIr::Lit(LiteralValue::Null(DataType::Array(Box::new(
                DataType::Double
            ))))
        );
        assert!(lit_null("geography").is_err());
    }

    #[test]
    fn test_array_keeps_order() {
        let a = array([lit_i32(3), col("x"), lit_i32(1)]);
        assert_eq!(a.expr().to_string(), "array(3, x, 1)");
    }

    #[test]
    fn test_call_function_validates_name() {
        let c = call_function("ST_Area", [col("g")]).unwrap();
        assert_eq!(c.expr().to_string(), "ST_Area(g)");
        let empty: [Column; 0] = [];
        assert!(matches!(
            call_function("", empty),
            Err(EngineError::User(_))
        ));
        assert!(call_function("ST Area", [col("g")]).is_err());
    }
}
