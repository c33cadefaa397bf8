//! SQLite database backend implementation via rusqlite

use crate::error::{DbError, DbResult};
use crate::traits::Database;
use async_trait::async_trait;
use rusqlite::Connection;
use sb_core::config::DbType;
use std::path::Path;
use std::sync::Mutex;
use std::time::Duration;

/// SQLite database backend
pub struct SqliteBackend {
    conn: Mutex<Connection>,
}

impl SqliteBackend {
    /// Create a new in-memory SQLite connection
    pub fn in_memory() -> DbResult<Self> {
        let conn =
            Connection::open_in_memory().map_err(|e| DbError::ConnectionError(e.to_string()))?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Create a new SQLite connection from a file path
    pub fn from_path(path: &Path) -> DbResult<Self> {
        let conn = Connection::open(path).map_err(|e| DbError::ConnectionError(e.to_string()))?;

        // Wait up to 5 seconds for locks held by concurrent test processes
        conn.busy_timeout(Duration::from_millis(5000))
            .map_err(|e| DbError::ConnectionError(e.to_string()))?;

        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Create from path string (handles :memory: special case)
    pub fn new(path: &str) -> DbResult<Self> {
        if path == ":memory:" {
            Self::in_memory()
        } else {
            Self::from_path(Path::new(path))
        }
    }

    /// Execute SQL synchronously
    fn execute_sync(&self, sql: &str) -> DbResult<usize> {
        let conn = self.conn.lock().unwrap();
        conn.execute(sql, [])
            .map_err(|e| DbError::ExecutionError(format!("{}: {}", e, sql)))
    }

    /// Execute batch SQL synchronously
    fn execute_batch_sync(&self, sql: &str) -> DbResult<()> {
        let conn = self.conn.lock().unwrap();
        conn.execute_batch(sql)
            .map_err(|e| DbError::ExecutionError(e.to_string()))
    }

    /// Query count synchronously
    fn query_count_sync(&self, sql: &str) -> DbResult<usize> {
        let conn = self.conn.lock().unwrap();
        let count: i64 = conn
            .query_row(&format!("SELECT COUNT(*) FROM ({})", sql), [], |row| {
                row.get(0)
            })
            .map_err(|e| DbError::ExecutionError(e.to_string()))?;
        Ok(count as usize)
    }

    /// Query a single text value synchronously
    fn query_text_sync(&self, sql: &str) -> DbResult<Option<String>> {
        let conn = self.conn.lock().unwrap();
        match conn.query_row(sql, [], |row| row.get::<_, Option<String>>(0)) {
            Ok(value) => Ok(value),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Check if relation exists synchronously
    fn relation_exists_sync(&self, name: &str) -> DbResult<bool> {
        let conn = self.conn.lock().unwrap();
        let count: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type IN ('table', 'view') AND name = ?1",
                [name],
                |row| row.get(0),
            )
            .map_err(|e| DbError::ExecutionError(e.to_string()))?;
        Ok(count > 0)
    }
}

#[async_trait]
impl Database for SqliteBackend {
    async fn execute(&self, sql: &str) -> DbResult<usize> {
        self.execute_sync(sql)
    }

    async fn execute_batch(&self, sql: &str) -> DbResult<()> {
        self.execute_batch_sync(sql)
    }

    async fn query_count(&self, sql: &str) -> DbResult<usize> {
        self.query_count_sync(sql)
    }

    async fn query_text(&self, sql: &str) -> DbResult<Option<String>> {
        self.query_text_sync(sql)
    }

    async fn relation_exists(&self, name: &str) -> DbResult<bool> {
        self.relation_exists_sync(name)
    }

    async fn drop_if_exists(&self, name: &str) -> DbResult<()> {
        self.execute_sync(&format!("DROP TABLE IF EXISTS {}", name))?;
        Ok(())
    }

    fn db_type(&self) -> DbType {
        DbType::Sqlite
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_in_memory() {
        let db = SqliteBackend::in_memory().unwrap();
        assert_eq!(db.db_type(), DbType::Sqlite);
    }

    #[tokio::test]
    async fn test_execute_and_count() {
        let db = SqliteBackend::in_memory().unwrap();
        db.execute("CREATE TABLE t (id INTEGER)").await.unwrap();
        let affected = db.execute("INSERT INTO t VALUES (1)").await.unwrap();
        assert_eq!(affected, 1);

        let count = db.query_count("SELECT * FROM t").await.unwrap();
        assert_eq!(count, 1);
    }

    #[tokio::test]
    async fn test_query_text_unicode() {
        let db = SqliteBackend::in_memory().unwrap();
        db.execute_batch("CREATE TABLE t (id INT, s TEXT); INSERT INTO t VALUES (1, '你好');")
            .await
            .unwrap();

        let value = db
            .query_text("SELECT s FROM t WHERE id = 1")
            .await
            .unwrap();
        assert_eq!(value.as_deref(), Some("你好"));
    }

    #[tokio::test]
    async fn test_query_text_no_rows() {
        let db = SqliteBackend::in_memory().unwrap();
        db.execute("CREATE TABLE t (id INT, s TEXT)").await.unwrap();

        let value = db
            .query_text("SELECT s FROM t WHERE id = 1")
            .await
            .unwrap();
        assert_eq!(value, None);
    }

    #[tokio::test]
    async fn test_boolean_literals() {
        let db = SqliteBackend::in_memory().unwrap();
        db.execute_batch(
            "CREATE TABLE t (id INT, flag BOOLEAN); INSERT INTO t VALUES (1, TRUE), (2, FALSE);",
        )
        .await
        .unwrap();

        let trues = db
            .query_count("SELECT * FROM t WHERE flag = TRUE")
            .await
            .unwrap();
        assert_eq!(trues, 1);
    }

    #[tokio::test]
    async fn test_relation_exists() {
        let db = SqliteBackend::in_memory().unwrap();
        assert!(!db.relation_exists("t").await.unwrap());

        db.execute("CREATE TABLE t (id INT)").await.unwrap();
        assert!(db.relation_exists("t").await.unwrap());
    }

    #[tokio::test]
    async fn test_drop_if_exists() {
        let db = SqliteBackend::in_memory().unwrap();
        db.execute("CREATE TABLE to_drop (id INT)").await.unwrap();
        db.drop_if_exists("to_drop").await.unwrap();
        assert!(!db.relation_exists("to_drop").await.unwrap());

        db.drop_if_exists("to_drop").await.unwrap();
    }

    #[tokio::test]
    async fn test_file_backed() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("fixtures.db");

        let db = SqliteBackend::new(path.to_str().unwrap()).unwrap();
        db.execute("CREATE TABLE t (id INT)").await.unwrap();
        drop(db);

        let reopened = SqliteBackend::new(path.to_str().unwrap()).unwrap();
        assert!(reopened.relation_exists("t").await.unwrap());
    }
}
