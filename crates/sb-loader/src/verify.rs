//! Data verification for loaded fixtures

use sb_core::fixture::{FixtureSet, TableFixture};
use sb_core::value::Value;
use sb_db::Database;

/// Outcome of a single verification check
#[derive(Debug, Clone)]
pub struct CheckResult {
    /// Check name
    pub name: String,

    /// Whether the check passed
    pub passed: bool,

    /// Explanation for failures
    pub detail: Option<String>,
}

impl CheckResult {
    /// Create a passed check result
    pub fn pass(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            passed: true,
            detail: None,
        }
    }

    /// Create a failed check result
    pub fn fail(name: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            passed: false,
            detail: Some(detail.into()),
        }
    }
}

/// Summary of a verification run
#[derive(Debug, Clone)]
pub struct VerifySummary {
    /// Total checks run
    pub total: usize,

    /// Checks passed
    pub passed: usize,

    /// Checks failed
    pub failed: usize,
}

impl VerifySummary {
    /// Create a summary from check results
    pub fn from_results(results: &[CheckResult]) -> Self {
        let total = results.len();
        let passed = results.iter().filter(|r| r.passed).count();

        Self {
            total,
            passed,
            failed: total - passed,
        }
    }

    /// Check if everything passed
    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }
}

/// Verifies loaded fixture data against the fixture literals
///
/// Backend errors never abort the run; a failing query becomes a failed
/// check carrying the error text.
pub struct Verifier<'a> {
    db: &'a dyn Database,
}

impl<'a> Verifier<'a> {
    /// Create a new verifier
    pub fn new(db: &'a dyn Database) -> Self {
        Self { db }
    }

    /// Run all checks for a fixture set
    pub async fn verify(&self, set: &FixtureSet) -> Vec<CheckResult> {
        let mut results = Vec::new();

        for table in &set.tables {
            results.push(self.check_row_count(table).await);
            results.extend(self.check_rows(table).await);
            results.extend(self.check_text_round_trips(table).await);
        }

        results
    }

    /// Run all checks and return summary
    pub async fn verify_all(&self, set: &FixtureSet) -> (Vec<CheckResult>, VerifySummary) {
        let results = self.verify(set).await;
        let summary = VerifySummary::from_results(&results);
        (results, summary)
    }

    /// Table contains exactly the fixture's row count
    async fn check_row_count(&self, table: &TableFixture) -> CheckResult {
        let name = format!("count:{}", table.name);
        let expected = table.rows.len();

        match self
            .db
            .query_count(&format!("SELECT * FROM {}", table.name))
            .await
        {
            Ok(count) if count == expected => CheckResult::pass(name),
            Ok(count) => CheckResult::fail(name, format!("expected {} rows, found {}", expected, count)),
            Err(e) => CheckResult::fail(name, e.to_string()),
        }
    }

    /// Every fixture row matches exactly one stored row
    async fn check_rows(&self, table: &TableFixture) -> Vec<CheckResult> {
        let mut results = Vec::with_capacity(table.rows.len());

        for (i, row) in table.rows.iter().enumerate() {
            let name = format!("row:{}[{}]", table.name, i);
            let sql = format!(
                "SELECT * FROM {} WHERE {}",
                table.name,
                table.row_predicate(row)
            );

            let result = match self.db.query_count(&sql).await {
                Ok(1) => CheckResult::pass(name),
                Ok(0) => CheckResult::fail(name, "no stored row matches the fixture row"),
                Ok(n) => CheckResult::fail(name, format!("{} stored rows match, expected 1", n)),
                Err(e) => CheckResult::fail(name, e.to_string()),
            };
            results.push(result);
        }

        results
    }

    /// Non-null text payloads read back byte-for-byte
    ///
    /// Comparison happens in Rust so multi-byte and combining characters
    /// are compared exactly, not under the backend's collation.
    async fn check_text_round_trips(&self, table: &TableFixture) -> Vec<CheckResult> {
        let Some(key) = table.key_column() else {
            return Vec::new();
        };
        let key_index = table
            .columns
            .iter()
            .position(|c| c.name == key.name)
            .unwrap_or(0);

        let mut results = Vec::new();

        for row in &table.rows {
            let key_value = &row[key_index];

            for (column, value) in table.columns.iter().zip(row) {
                let Value::Text(expected) = value else {
                    continue;
                };

                let name = format!(
                    "roundtrip:{}.{}[{}]",
                    table.name,
                    column.name,
                    key_value.to_sql()
                );
                let sql = format!(
                    "SELECT {} FROM {} WHERE {} = {}",
                    column.name,
                    table.name,
                    key.name,
                    key_value.to_sql()
                );

                let result = match self.db.query_text(&sql).await {
                    Ok(Some(actual)) if &actual == expected => CheckResult::pass(name),
                    Ok(Some(actual)) => CheckResult::fail(
                        name,
                        format!("stored {:?} does not match fixture {:?}", actual, expected),
                    ),
                    Ok(None) => CheckResult::fail(name, "no stored value"),
                    Err(e) => CheckResult::fail(name, e.to_string()),
                };
                results.push(result);
            }
        }

        results
    }
}

#[cfg(test)]
#[path = "verify_test.rs"]
mod tests;
