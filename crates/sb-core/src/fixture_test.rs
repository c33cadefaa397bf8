use super::*;

fn sample_table() -> TableFixture {
    TableFixture::new(
        "sample",
        vec![
            Column::not_null("id", SqlType::Integer),
            Column::nullable("label", SqlType::Text),
            Column::nullable("score", SqlType::DoublePrecision),
        ],
        vec![
            vec![Value::Int(1), Value::text("a"), Value::Float(1.5)],
            vec![Value::Int(2), Value::Null, Value::Null],
        ],
    )
}

#[test]
fn test_validate_ok() {
    sample_table().validate().unwrap();
}

#[test]
fn test_validate_arity_mismatch() {
    let mut table = sample_table();
    table.rows.push(vec![Value::Int(3)]);

    let err = table.validate().unwrap_err();
    assert!(matches!(
        err,
        CoreError::ColumnCountMismatch {
            row: 2,
            expected: 3,
            found: 1,
            ..
        }
    ));
}

#[test]
fn test_validate_null_violation() {
    let mut table = sample_table();
    table.rows.push(vec![Value::Null, Value::Null, Value::Null]);

    let err = table.validate().unwrap_err();
    assert!(matches!(err, CoreError::NullViolation { row: 2, .. }));
}

#[test]
fn test_validate_type_mismatch() {
    let mut table = sample_table();
    table
        .rows
        .push(vec![Value::Int(3), Value::Bool(true), Value::Null]);

    let err = table.validate().unwrap_err();
    assert!(matches!(err, CoreError::TypeMismatch { row: 2, .. }));
}

#[test]
fn test_create_table_sql() {
    let sql = sample_table().create_table_sql(DbType::DuckDb);
    assert_eq!(
        sql,
        "CREATE TABLE IF NOT EXISTS sample (id INTEGER NOT NULL, label TEXT, score DOUBLE PRECISION)"
    );
}

#[test]
fn test_create_table_sql_uuid_on_sqlite() {
    let table = TableFixture::new(
        "t",
        vec![Column::not_null("u", SqlType::Uuid)],
        Vec::new(),
    );
    assert_eq!(
        table.create_table_sql(DbType::Sqlite),
        "CREATE TABLE IF NOT EXISTS t (u TEXT NOT NULL)"
    );
    assert_eq!(
        table.create_table_sql(DbType::DuckDb),
        "CREATE TABLE IF NOT EXISTS t (u UUID NOT NULL)"
    );
}

#[test]
fn test_insert_statements_in_listed_order() {
    let stmts = sample_table().insert_statements();
    assert_eq!(stmts.len(), 2);
    assert_eq!(
        stmts[0],
        "INSERT INTO sample (id, label, score) VALUES (1, 'a', 1.5)"
    );
    assert_eq!(
        stmts[1],
        "INSERT INTO sample (id, label, score) VALUES (2, NULL, NULL)"
    );
}

#[test]
fn test_row_predicate_nulls_use_is_null() {
    let table = sample_table();
    let predicate = table.row_predicate(&table.rows[1]);
    assert_eq!(predicate, "id = 2 AND label IS NULL AND score IS NULL");
}

#[test]
fn test_key_column() {
    let table = sample_table();
    assert_eq!(table.key_column().unwrap().name, "id");

    let keyless = TableFixture::new(
        "k",
        vec![Column::nullable("x", SqlType::Text)],
        Vec::new(),
    );
    assert!(keyless.key_column().is_none());
}

#[test]
fn test_fixture_set_lookup_and_counts() {
    let set = FixtureSet::new("demo", "demo set", vec![sample_table()]);
    assert!(set.table("sample").is_some());
    assert!(set.table("missing").is_none());
    assert_eq!(set.row_count(), 2);
    set.validate().unwrap();
}

#[test]
fn test_drop_table_sql() {
    assert_eq!(sample_table().drop_table_sql(), "DROP TABLE IF EXISTS sample");
}
