//! Error types for sb-loader

use sb_core::CoreError;
use sb_db::DbError;
use thiserror::Error;

/// Errors surfaced while applying a fixture set
///
/// No local recovery happens here: backend errors propagate to the
/// caller unmodified.
#[derive(Error, Debug)]
pub enum LoadError {
    /// Fixture data failed validation before any SQL ran
    #[error(transparent)]
    Fixture(#[from] CoreError),

    /// The backend rejected a statement
    #[error(transparent)]
    Db(#[from] DbError),
}

/// Result type alias for LoadError
pub type LoadResult<T> = Result<T, LoadError>;
