//! SQLite row queries.
//!
//! A thin pass-through over rusqlite's prepare/execute cycle: no pooling,
//! no transactions, no parameter binding. The caller owns the connection's
//! lifecycle and is fully responsible for query safety, and the connection
//! must not be used concurrently for the duration of a call.

use rusqlite::types::ValueRef;
use rusqlite::Connection;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Core value types for SQLite columns, mirroring the storage classes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
    Blob(Vec<u8>),
}

impl Value {
    /// Renders the value as display text.
    ///
    /// `Null` renders as the empty string and is therefore
    /// indistinguishable from an actual empty `Text`; callers that need
    /// the distinction must match on the variant instead.
    pub fn into_display_text(self) -> String {
        match self {
            Value::Null => String::new(),
            Value::Integer(i) => i.to_string(),
            Value::Real(r) => r.to_string(),
            Value::Text(s) => s,
            Value::Blob(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
        }
    }

    /// True when the value is the SQL `NULL` storage class.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

impl From<ValueRef<'_>> for Value {
    fn from(value: ValueRef<'_>) -> Self {
        match value {
            ValueRef::Null => Value::Null,
            ValueRef::Integer(i) => Value::Integer(i),
            ValueRef::Real(r) => Value::Real(r),
            ValueRef::Text(t) => Value::Text(String::from_utf8_lossy(t).into_owned()),
            ValueRef::Blob(b) => Value::Blob(b.to_vec()),
        }
    }
}

/// Executes `sql` and returns every result row with each column rendered
/// as text, or the reason the query could not run.
///
/// Rows follow SQLite's natural iteration order for the statement, columns
/// follow the statement's declared column order, and each row carries
/// exactly the declared column count. The prepared statement is released on
/// every exit path, success or failure.
///
/// An `Ok` with an empty vector means the query ran and matched nothing;
/// [`Error::Prepare`] means the SQL never compiled.
pub fn try_query_rows(conn: &Connection, sql: &str) -> Result<Vec<Vec<String>>> {
    let mut stmt = conn.prepare(sql).map_err(Error::Prepare)?;
    let column_count = stmt.column_count();

    let mut rows = stmt.query([]).map_err(Error::Fetch)?;
    let mut results = Vec::new();
    while let Some(row) = rows.next().map_err(Error::Fetch)? {
        let mut columns = Vec::with_capacity(column_count);
        for i in 0..column_count {
            let value = Value::from(row.get_ref(i).map_err(Error::Fetch)?);
            columns.push(value.into_display_text());
        }
        results.push(columns);
    }
    Ok(results)
}

/// Executes `sql` and returns every result row as text, swallowing
/// failures.
///
/// A query that cannot be prepared or fetched yields an empty result set,
/// indistinguishable from a query that matched no rows. Use
/// [`try_query_rows`] when the two must be told apart.
pub fn query_rows(conn: &Connection, sql: &str) -> Vec<Vec<String>> {
    try_query_rows(conn, sql).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_renders_as_empty_string() {
        assert_eq!(Value::Null.into_display_text(), "");
        assert!(Value::Null.is_null());
        assert!(!Value::Text(String::new()).is_null());
    }

    #[test]
    fn scalar_values_render_as_text() {
        assert_eq!(Value::Integer(42).into_display_text(), "42");
        assert_eq!(Value::Real(1.5).into_display_text(), "1.5");
        assert_eq!(Value::Text("abc".into()).into_display_text(), "abc");
        assert_eq!(Value::Blob(b"xyz".to_vec()).into_display_text(), "xyz");
    }

    #[test]
    fn value_ref_conversion_covers_all_storage_classes() {
        assert_eq!(Value::from(ValueRef::Null), Value::Null);
        assert_eq!(Value::from(ValueRef::Integer(7)), Value::Integer(7));
        assert_eq!(Value::from(ValueRef::Real(2.5)), Value::Real(2.5));
        assert_eq!(
            Value::from(ValueRef::Text(b"hi")),
            Value::Text("hi".into())
        );
        assert_eq!(
            Value::from(ValueRef::Blob(&[1, 2, 3])),
            Value::Blob(vec![1, 2, 3])
        );
    }
}
