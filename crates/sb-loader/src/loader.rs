//! Fixture application against a database backend

use crate::error::LoadResult;
use chrono::Utc;
use sb_core::fixture::FixtureSet;
use sb_core::report::{LoadReport, TableLoadResult};
use sb_db::Database;

/// Options controlling a fixture load
#[derive(Debug, Clone, Copy, Default)]
pub struct LoadOptions {
    /// Drop fixture tables before loading
    ///
    /// Inserts are not idempotent; without this, loading twice
    /// duplicates rows.
    pub refresh: bool,
}

/// Applies fixture sets to a backend
pub struct Loader<'a> {
    db: &'a dyn Database,
}

impl<'a> Loader<'a> {
    /// Create a new loader
    pub fn new(db: &'a dyn Database) -> Self {
        Self { db }
    }

    /// Load a fixture set with default options
    pub async fn load(&self, set: &FixtureSet) -> LoadResult<LoadReport> {
        self.load_with(set, LoadOptions::default()).await
    }

    /// Load a fixture set
    ///
    /// Statement order is preserved: per table, the idempotent CREATE
    /// TABLE IF NOT EXISTS runs before any INSERT, and rows are inserted
    /// in listed order.
    pub async fn load_with(&self, set: &FixtureSet, opts: LoadOptions) -> LoadResult<LoadReport> {
        set.validate()?;

        let dialect = self.db.db_type();
        let started_at = Utc::now();
        let mut tables = Vec::with_capacity(set.tables.len());

        for table in &set.tables {
            if opts.refresh {
                log::debug!("Dropping existing table: {}", table.name);
                self.db.drop_if_exists(&table.name).await?;
            }

            let created = !self.db.relation_exists(&table.name).await?;
            self.db.execute(&table.create_table_sql(dialect)).await?;

            let mut rows_inserted = 0;
            for statement in table.insert_statements() {
                rows_inserted += self.db.execute(&statement).await?;
            }

            log::debug!(
                "Loaded {} rows into {} (created: {})",
                rows_inserted,
                table.name,
                created
            );

            tables.push(TableLoadResult {
                table: table.name.clone(),
                created,
                rows_inserted,
            });
        }

        Ok(LoadReport {
            fixture_set: set.name.clone(),
            backend: dialect.to_string(),
            started_at,
            finished_at: Utc::now(),
            tables,
        })
    }

    /// Drop every table of a fixture set, idempotently
    pub async fn clean(&self, set: &FixtureSet) -> LoadResult<Vec<String>> {
        let mut dropped = Vec::new();

        for table in &set.tables {
            if self.db.relation_exists(&table.name).await? {
                self.db.execute(&table.drop_table_sql()).await?;
                dropped.push(table.name.clone());
            }
        }

        Ok(dropped)
    }
}

#[cfg(test)]
#[path = "loader_test.rs"]
mod tests;
