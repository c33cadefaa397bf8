//! sb-loader - Fixture application and verification for Seedbed
//!
//! `Loader` replays a fixture set's DDL and DML against a backend in
//! listed order; `Verifier` checks the loaded data matches the fixture
//! literals.

pub mod error;
pub mod loader;
pub mod verify;

pub use error::{LoadError, LoadResult};
pub use loader::{LoadOptions, Loader};
pub use verify::{CheckResult, Verifier, VerifySummary};
