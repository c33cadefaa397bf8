//! Database trait definition

use crate::error::DbResult;
use async_trait::async_trait;
use sb_core::config::DbType;

/// Database abstraction trait for Seedbed
///
/// Implementations must be Send + Sync for async operation.
#[async_trait]
pub trait Database: Send + Sync {
    /// Execute SQL that modifies data, returns affected rows
    async fn execute(&self, sql: &str) -> DbResult<usize>;

    /// Execute multiple SQL statements
    async fn execute_batch(&self, sql: &str) -> DbResult<()>;

    /// Execute query returning row count
    async fn query_count(&self, sql: &str) -> DbResult<usize>;

    /// First column of the first row as text
    ///
    /// Returns Ok(None) when no row matches or the value is NULL.
    async fn query_text(&self, sql: &str) -> DbResult<Option<String>>;

    /// Check if a table or view exists
    async fn relation_exists(&self, name: &str) -> DbResult<bool>;

    /// Drop a table if it exists
    async fn drop_if_exists(&self, name: &str) -> DbResult<()>;

    /// Backend type, also used as the SQL dialect for generated DDL
    fn db_type(&self) -> DbType;
}
