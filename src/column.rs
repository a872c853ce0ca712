use std::fmt;

use sedona_connect_core::{ExprIr, SedonaConnectConfig, expr, to_connect_json};
use serde_json::Value;

/// Column - a client-side handle to an unevaluated expression.
/// Thin wrapper around [`ExprIr`].
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    expr: ExprIr,
}

impl Column {
    /// Create a new Column from a column name
    pub fn new(name: String) -> Self {
        Column {
            expr: ExprIr::Column(name),
        }
    }

    /// Create a Column from an expression
    pub fn from_expr(expr: ExprIr) -> Self {
        Column { expr }
    }

    /// Get the underlying expression
    pub fn expr(&self) -> &ExprIr {
        &self.expr
    }

    /// Convert to the underlying expression (consumes self)
    pub fn into_expr(self) -> ExprIr {
        self.expr
    }

    /// Alias the column
    pub fn alias(&self, name: &str) -> Column {
        Column {
            expr: expr::alias(self.expr.clone(), name),
        }
    }

    /// Spark Connect `Expression` payload for this column, encoded per `config`.
    pub fn to_connect_json(&self, config: &SedonaConnectConfig) -> Value {
        to_connect_json(&self.expr, config.function_encoding)
    }
}

impl From<ExprIr> for Column {
    fn from(expr: ExprIr) -> Self {
        Column::from_expr(expr)
    }
}

impl From<&Column> for Column {
    fn from(c: &Column) -> Self {
        c.clone()
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Column<'{}'>", self.expr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sedona_connect_core::FunctionEncoding;

    #[test]
    fn test_display_wraps_expression_text() {
        let c = Column::new("geom".to_string());
        assert_eq!(c.to_string(), "Column<'geom'>");
        assert_eq!(c.expr().to_string(), "geom");
    }

    #[test]
    fn test_alias() {
        let c = Column::new("g".to_string()).alias("geom");
        assert_eq!(c.expr().to_string(), "g AS geom");
        assert_eq!(
            c.to_connect_json(&SedonaConnectConfig::default())["alias"]["name"][0],
            "geom"
        );
    }

    #[test]
    fn test_to_connect_json_honors_encoding() {
        let c = Column::from_expr(expr::call_function("ST_Area", vec![expr::col("g")]));
        let legacy = SedonaConnectConfig::default()
            .with_function_encoding(FunctionEncoding::UnresolvedUserDefined);
        assert!(c.to_connect_json(&legacy).get("unresolvedFunction").is_some());
        assert!(
            c.to_connect_json(&SedonaConnectConfig::default())
                .get("callFunction")
                .is_some()
        );
    }
}
