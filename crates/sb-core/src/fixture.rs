//! Fixture model: tables of literal rows and the SQL they render to

use crate::config::DbType;
use crate::error::{CoreError, CoreResult};
use crate::value::{SqlType, Value};
use serde::{Deserialize, Serialize};

/// A column declaration in a fixture table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Column {
    /// Column name
    pub name: String,

    /// Declared SQL type
    pub sql_type: SqlType,

    /// NOT NULL constraint
    pub not_null: bool,
}

impl Column {
    /// A NOT NULL column
    pub fn not_null(name: impl Into<String>, sql_type: SqlType) -> Self {
        Self {
            name: name.into(),
            sql_type,
            not_null: true,
        }
    }

    /// A nullable column
    pub fn nullable(name: impl Into<String>, sql_type: SqlType) -> Self {
        Self {
            name: name.into(),
            sql_type,
            not_null: false,
        }
    }
}

/// A fixture table: declared columns plus literal rows
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableFixture {
    /// Table name
    pub name: String,

    /// Column declarations, in DDL order
    pub columns: Vec<Column>,

    /// Literal rows, inserted in listed order
    pub rows: Vec<Vec<Value>>,
}

impl TableFixture {
    pub fn new(name: impl Into<String>, columns: Vec<Column>, rows: Vec<Vec<Value>>) -> Self {
        Self {
            name: name.into(),
            columns,
            rows,
        }
    }

    /// Validate row arity, NOT NULL conformance, and value types
    /// before any SQL is rendered
    pub fn validate(&self) -> CoreResult<()> {
        for (i, row) in self.rows.iter().enumerate() {
            if row.len() != self.columns.len() {
                return Err(CoreError::ColumnCountMismatch {
                    table: self.name.clone(),
                    row: i,
                    expected: self.columns.len(),
                    found: row.len(),
                });
            }

            for (column, value) in self.columns.iter().zip(row) {
                if column.not_null && value.is_null() {
                    return Err(CoreError::NullViolation {
                        table: self.name.clone(),
                        row: i,
                        column: column.name.clone(),
                    });
                }
                if !value.fits(column.sql_type) {
                    return Err(CoreError::TypeMismatch {
                        table: self.name.clone(),
                        row: i,
                        column: column.name.clone(),
                        expected: column.sql_type.to_string(),
                    });
                }
            }
        }

        Ok(())
    }

    /// Idempotent DDL for this table
    pub fn create_table_sql(&self, db: DbType) -> String {
        let columns = self
            .columns
            .iter()
            .map(|c| {
                let mut def = format!("{} {}", c.name, c.sql_type.ddl_name(db));
                if c.not_null {
                    def.push_str(" NOT NULL");
                }
                def
            })
            .collect::<Vec<_>>()
            .join(", ");

        format!("CREATE TABLE IF NOT EXISTS {} ({})", self.name, columns)
    }

    /// One INSERT statement per row, in listed order
    pub fn insert_statements(&self) -> Vec<String> {
        let column_list = self
            .columns
            .iter()
            .map(|c| c.name.as_str())
            .collect::<Vec<_>>()
            .join(", ");

        self.rows
            .iter()
            .map(|row| {
                let values = row.iter().map(Value::to_sql).collect::<Vec<_>>().join(", ");
                format!(
                    "INSERT INTO {} ({}) VALUES ({})",
                    self.name, column_list, values
                )
            })
            .collect()
    }

    /// DDL to remove this table
    pub fn drop_table_sql(&self) -> String {
        format!("DROP TABLE IF EXISTS {}", self.name)
    }

    /// WHERE clause matching one row exactly, NULLs via IS NULL
    pub fn row_predicate(&self, row: &[Value]) -> String {
        self.columns
            .iter()
            .zip(row)
            .map(|(column, value)| {
                if value.is_null() {
                    format!("{} IS NULL", column.name)
                } else {
                    format!("{} = {}", column.name, value.to_sql())
                }
            })
            .collect::<Vec<_>>()
            .join(" AND ")
    }

    /// First NOT NULL integer column, used as the lookup key for
    /// single-value reads
    pub fn key_column(&self) -> Option<&Column> {
        self.columns
            .iter()
            .find(|c| c.not_null && c.sql_type == SqlType::Integer)
    }
}

/// A named group of fixture tables loaded together
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureSet {
    /// Set name
    pub name: String,

    /// Human-readable description
    pub description: String,

    /// Tables, in load order
    pub tables: Vec<TableFixture>,
}

impl FixtureSet {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        tables: Vec<TableFixture>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            tables,
        }
    }

    /// Look up a table by name
    pub fn table(&self, name: &str) -> Option<&TableFixture> {
        self.tables.iter().find(|t| t.name == name)
    }

    /// Total rows across all tables
    pub fn row_count(&self) -> usize {
        self.tables.iter().map(|t| t.rows.len()).sum()
    }

    /// Validate every table in the set
    pub fn validate(&self) -> CoreResult<()> {
        for table in &self.tables {
            table.validate()?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "fixture_test.rs"]
mod tests;
