use super::*;
use tempfile::TempDir;

fn write_config(dir: &TempDir, filename: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(filename);
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_load_minimal_config() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "seedbed.yml", "name: myproject\n");

    let config = Config::load(&path).unwrap();
    assert_eq!(config.name, "myproject");
    assert_eq!(config.version, "1.0.0");
    assert_eq!(config.database.db_type, DbType::DuckDb);
    assert_eq!(config.database.path, "seedbed.db");
    assert_eq!(config.fixtures, vec!["basic".to_string()]);
}

#[test]
fn test_load_full_config() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        "seedbed.yml",
        r#"
name: integration
version: "2.0.0"
database:
  type: sqlite
  path: ":memory:"
fixtures: ["extended"]
"#,
    );

    let config = Config::load(&path).unwrap();
    assert_eq!(config.name, "integration");
    assert_eq!(config.version, "2.0.0");
    assert_eq!(config.database.db_type, DbType::Sqlite);
    assert_eq!(config.database.path, ":memory:");
    assert_eq!(config.fixtures, vec!["extended".to_string()]);
}

#[test]
fn test_load_missing_file() {
    let dir = TempDir::new().unwrap();
    let err = Config::load(&dir.path().join("seedbed.yml")).unwrap_err();
    assert!(matches!(err, CoreError::ConfigNotFound { .. }));
}

#[test]
fn test_load_from_dir_prefers_yml() {
    let dir = TempDir::new().unwrap();
    write_config(&dir, "seedbed.yml", "name: from_yml\n");
    write_config(&dir, "seedbed.yaml", "name: from_yaml\n");

    let config = Config::load_from_dir(dir.path()).unwrap();
    assert_eq!(config.name, "from_yml");
}

#[test]
fn test_load_from_dir_falls_back_to_yaml() {
    let dir = TempDir::new().unwrap();
    write_config(&dir, "seedbed.yaml", "name: from_yaml\n");

    let config = Config::load_from_dir(dir.path()).unwrap();
    assert_eq!(config.name, "from_yaml");
}

#[test]
fn test_load_from_dir_missing() {
    let dir = TempDir::new().unwrap();
    let err = Config::load_from_dir(dir.path()).unwrap_err();
    assert!(matches!(err, CoreError::ConfigNotFound { .. }));
}

#[test]
fn test_unknown_field_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "seedbed.yml", "name: x\nmodels: [a]\n");

    let err = Config::load(&path).unwrap_err();
    assert!(matches!(err, CoreError::YamlParse(_)));
}

#[test]
fn test_empty_name_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "seedbed.yml", "name: \"\"\n");

    let err = Config::load(&path).unwrap_err();
    assert!(matches!(err, CoreError::ConfigInvalid { .. }));
}

#[test]
fn test_empty_fixture_entry_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "seedbed.yml", "name: x\nfixtures: [\"\"]\n");

    let err = Config::load(&path).unwrap_err();
    assert!(matches!(err, CoreError::ConfigInvalid { .. }));
}

#[test]
fn test_db_type_display() {
    assert_eq!(DbType::DuckDb.to_string(), "duckdb");
    assert_eq!(DbType::Sqlite.to_string(), "sqlite");
}
