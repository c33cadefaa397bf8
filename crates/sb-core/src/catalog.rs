//! Built-in fixture sets
//!
//! The literal data database-client integration suites run against: a
//! small typed table (`test_table`) and a Unicode string table
//! (`test_str`). Two sets exist because backends with a native UUID type
//! get an extra NOT NULL UUID column on `test_table`; on backends
//! without one the column is stored as canonical text.
//!
//! Combining characters are written as escapes so the payloads stay
//! visible in review: `test_str` row 3 carries U+0301 (combining acute)
//! and rows 6 and 7 carry U+0306 (combining breve).

use crate::error::{CoreError, CoreResult};
use crate::fixture::{Column, FixtureSet, TableFixture};
use crate::value::{SqlType, Value};
use uuid::uuid;

/// Name of the fixture set without the UUID column
pub const BASIC: &str = "basic";

/// Name of the fixture set with the UUID column on `test_table`
pub const EXTENDED: &str = "extended";

/// All built-in fixture sets, in listing order
pub fn builtin_sets() -> Vec<FixtureSet> {
    vec![basic(), extended()]
}

/// Look up a built-in fixture set by name
pub fn get(name: &str) -> CoreResult<FixtureSet> {
    match name {
        BASIC => Ok(basic()),
        EXTENDED => Ok(extended()),
        _ => Err(CoreError::UnknownFixtureSet {
            name: name.to_string(),
        }),
    }
}

/// The base fixture set: `test_table` plus `test_str`
pub fn basic() -> FixtureSet {
    FixtureSet::new(
        BASIC,
        "Typed rows and Unicode strings, no UUID column",
        vec![test_table(), test_str()],
    )
}

/// The extended fixture set: `test_table` with a NOT NULL UUID column,
/// plus `test_str`
pub fn extended() -> FixtureSet {
    FixtureSet::new(
        EXTENDED,
        "Typed rows with a NOT NULL UUID column, plus Unicode strings",
        vec![test_table_with_uuid(), test_str()],
    )
}

fn test_table_columns() -> Vec<Column> {
    vec![
        Column::not_null("test_int", SqlType::Integer),
        Column::nullable("test_nullint", SqlType::Integer),
        Column::nullable("test_str", SqlType::Text),
        Column::nullable("test_float", SqlType::DoublePrecision),
        Column::nullable("test_bool", SqlType::Boolean),
    ]
}

fn test_table_rows() -> Vec<Vec<Value>> {
    vec![
        vec![
            Value::Int(1),
            Value::Int(3),
            Value::text("str1"),
            Value::Null,
            Value::Bool(true),
        ],
        vec![
            Value::Int(2),
            Value::Null,
            Value::text("str2"),
            Value::Float(2.2),
            Value::Bool(false),
        ],
        vec![
            Value::Int(0),
            Value::Int(5),
            Value::text("a"),
            Value::Float(3.1),
            Value::Null,
        ],
        vec![
            Value::Int(3),
            Value::Int(7),
            Value::text("b"),
            Value::Float(3.0),
            Value::Bool(false),
        ],
        vec![
            Value::Int(4),
            Value::Int(9),
            Value::text("c"),
            Value::Float(7.8),
            Value::Null,
        ],
        vec![
            Value::Int(1314),
            Value::Int(2),
            Value::Null,
            Value::Float(-10.0),
            Value::Bool(true),
        ],
    ]
}

fn test_table() -> TableFixture {
    TableFixture::new("test_table", test_table_columns(), test_table_rows())
}

fn test_table_with_uuid() -> TableFixture {
    let uuids = [
        uuid!("86b494cc-96b2-11eb-9298-3e22fbb9fe9d"),
        uuid!("86b49b84-96b2-11eb-9298-3e22fbb9fe9d"),
        uuid!("86b49c42-96b2-11eb-9298-3e22fbb9fe9d"),
        uuid!("86b49cce-96b2-11eb-9298-3e22fbb9fe9d"),
        uuid!("59e06bb4-9d02-11eb-9021-3e22fbb9fe9d"),
        uuid!("5fd2de58-9d02-11eb-9021-3e22fbb9fe9d"),
    ];

    let mut columns = test_table_columns();
    columns.push(Column::not_null("test_uuid", SqlType::Uuid));

    let rows = test_table_rows()
        .into_iter()
        .zip(uuids)
        .map(|(mut row, uuid)| {
            row.push(Value::Uuid(uuid));
            row
        })
        .collect();

    TableFixture::new("test_table", columns, rows)
}

fn test_str() -> TableFixture {
    TableFixture::new(
        "test_str",
        vec![
            Column::not_null("id", SqlType::Integer),
            Column::nullable("test_language", SqlType::Text),
            Column::nullable("test_hello", SqlType::Text),
        ],
        vec![
            vec![Value::Int(0), Value::text("English"), Value::text("Hello")],
            vec![Value::Int(1), Value::text("中文"), Value::text("你好")],
            vec![
                Value::Int(2),
                Value::text("日本語"),
                Value::text("こんにちは"),
            ],
            vec![
                Value::Int(3),
                Value::text("русский"),
                Value::text("Здра\u{0301}вствуйте"),
            ],
            vec![Value::Int(4), Value::text("Emoji"), Value::text("😁😂😜")],
            vec![Value::Int(5), Value::text("Latin1"), Value::text("¥§¤®ð")],
            vec![Value::Int(6), Value::text("Extra"), Value::text("y\u{0306}")],
            vec![
                Value::Int(7),
                Value::text("Mixed"),
                Value::text("Ha好ち😁ðy\u{0306}"),
            ],
        ],
    )
}

#[cfg(test)]
#[path = "catalog_test.rs"]
mod tests;
