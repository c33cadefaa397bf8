//! sb-db - Database abstraction layer for Seedbed
//!
//! This crate provides the `Database` trait and implementations for
//! DuckDB and SQLite, the embedded backends fixture loads target.

pub mod duckdb;
pub mod error;
pub mod sqlite;
pub mod traits;

pub use duckdb::DuckDbBackend;
pub use error::{DbError, DbResult};
pub use sqlite::SqliteBackend;
pub use traits::Database;

use sb_core::config::{DatabaseConfig, DbType};
use std::sync::Arc;

/// Open the backend described by the configuration
pub fn connect(config: &DatabaseConfig) -> DbResult<Arc<dyn Database>> {
    match config.db_type {
        DbType::DuckDb => Ok(Arc::new(DuckDbBackend::new(&config.path)?)),
        DbType::Sqlite => Ok(Arc::new(SqliteBackend::new(&config.path)?)),
    }
}
