//! Error types for smallkit operations.
//!
//! Uses `thiserror` for ergonomic error definition.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the fallible SQLite query path.
///
/// The two variants keep "the query failed" distinguishable from "the query
/// matched no rows"; the silent [`crate::sqlite::query_rows`] wrapper
/// collapses both into an empty result set.
#[derive(Debug, Error)]
pub enum Error {
    /// The SQL text failed to compile into a prepared statement.
    #[error("failed to prepare statement: {0}")]
    Prepare(#[source] rusqlite::Error),

    /// The statement prepared, but a row or column could not be fetched.
    #[error("failed to fetch row: {0}")]
    Fetch(#[source] rusqlite::Error),
}
