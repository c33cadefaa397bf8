use super::*;
use chrono::TimeZone;

fn sample_report() -> LoadReport {
    LoadReport {
        fixture_set: "basic".to_string(),
        backend: "duckdb".to_string(),
        started_at: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
        finished_at: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 2).unwrap(),
        tables: vec![
            TableLoadResult {
                table: "test_table".to_string(),
                created: true,
                rows_inserted: 6,
            },
            TableLoadResult {
                table: "test_str".to_string(),
                created: true,
                rows_inserted: 8,
            },
        ],
    }
}

#[test]
fn test_total_rows() {
    assert_eq!(sample_report().total_rows(), 14);
}

#[test]
fn test_duration_ms() {
    assert_eq!(sample_report().duration_ms(), 2000);
}

#[test]
fn test_json_round_trip() {
    let report = sample_report();
    let json = report.to_json().unwrap();

    let parsed: LoadReport = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.fixture_set, "basic");
    assert_eq!(parsed.backend, "duckdb");
    assert_eq!(parsed.tables.len(), 2);
    assert_eq!(parsed.total_rows(), 14);
    assert!(parsed.tables[0].created);
}
