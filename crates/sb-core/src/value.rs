//! Literal values and column types for fixture data

use crate::config::DbType;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Column type used in fixture DDL
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SqlType {
    Integer,
    DoublePrecision,
    Text,
    Boolean,
    Uuid,
}

impl SqlType {
    /// DDL type name for the given backend
    ///
    /// SQLite has no native UUID type; the canonical textual form is
    /// stored in a TEXT column instead.
    pub fn ddl_name(&self, db: DbType) -> &'static str {
        match self {
            SqlType::Integer => "INTEGER",
            SqlType::DoublePrecision => "DOUBLE PRECISION",
            SqlType::Text => "TEXT",
            SqlType::Boolean => "BOOLEAN",
            SqlType::Uuid => match db {
                DbType::DuckDb => "UUID",
                DbType::Sqlite => "TEXT",
            },
        }
    }
}

impl std::fmt::Display for SqlType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SqlType::Integer => "INTEGER",
            SqlType::DoublePrecision => "DOUBLE PRECISION",
            SqlType::Text => "TEXT",
            SqlType::Boolean => "BOOLEAN",
            SqlType::Uuid => "UUID",
        };
        write!(f, "{name}")
    }
}

/// A literal cell value in a fixture row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Value {
    Null,
    Int(i64),
    Float(f64),
    Text(String),
    Bool(bool),
    Uuid(Uuid),
}

impl Value {
    /// Convenience constructor for text values
    pub fn text(s: impl Into<String>) -> Self {
        Value::Text(s.into())
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Whether this value can populate a column of the given type
    pub fn fits(&self, ty: SqlType) -> bool {
        match self {
            Value::Null => true,
            Value::Int(_) => ty == SqlType::Integer,
            Value::Float(_) => ty == SqlType::DoublePrecision,
            Value::Text(_) => ty == SqlType::Text,
            Value::Bool(_) => ty == SqlType::Boolean,
            Value::Uuid(_) => ty == SqlType::Uuid,
        }
    }

    /// Render as a SQL literal
    ///
    /// Single quotes in text are doubled. Floats always carry a decimal
    /// point so the literal is unambiguously a double.
    pub fn to_sql(&self) -> String {
        match self {
            Value::Null => "NULL".to_string(),
            Value::Int(v) => v.to_string(),
            Value::Float(v) => {
                let s = v.to_string();
                if s.contains('.') || s.contains('e') || s.contains("inf") || s.contains("NaN") {
                    s
                } else {
                    format!("{s}.0")
                }
            }
            Value::Text(v) => format!("'{}'", v.replace('\'', "''")),
            Value::Bool(v) => if *v { "TRUE" } else { "FALSE" }.to_string(),
            Value::Uuid(v) => format!("'{v}'"),
        }
    }
}

#[cfg(test)]
#[path = "value_test.rs"]
mod tests;
