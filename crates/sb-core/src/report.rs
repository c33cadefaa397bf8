//! Load run reporting

use crate::error::CoreResult;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Outcome of loading one fixture set
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadReport {
    /// Fixture set that was applied
    pub fixture_set: String,

    /// Backend type identifier (duckdb or sqlite)
    pub backend: String,

    /// When the load started
    pub started_at: DateTime<Utc>,

    /// When the load finished
    pub finished_at: DateTime<Utc>,

    /// Per-table results, in load order
    pub tables: Vec<TableLoadResult>,
}

/// Outcome of loading one table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableLoadResult {
    /// Table name
    pub table: String,

    /// Whether the table was created by this load (false when the
    /// idempotent DDL found it already present)
    pub created: bool,

    /// Rows inserted by this load
    pub rows_inserted: usize,
}

impl LoadReport {
    /// Total rows inserted across all tables
    pub fn total_rows(&self) -> usize {
        self.tables.iter().map(|t| t.rows_inserted).sum()
    }

    /// Wall-clock duration of the load in milliseconds
    pub fn duration_ms(&self) -> i64 {
        (self.finished_at - self.started_at).num_milliseconds()
    }

    /// Serialize as pretty-printed JSON
    pub fn to_json(&self) -> CoreResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
#[path = "report_test.rs"]
mod tests;
