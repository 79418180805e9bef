//! Small self-contained helpers: generic arithmetic, key-based ordering,
//! random strings, and SQLite row queries.
//!
//! # Intention
//!
//! - Provide a handful of independent utility operations behind one crate.
//! - Keep each helper free-standing: the only shared state anywhere is the
//!   process-wide random generator in [`random`].
//!
//! # Architectural Boundaries
//!
//! - No connection management: the SQLite helpers borrow an already-open
//!   [`rusqlite::Connection`] owned by the caller.
//! - No business logic or unrelated utilities.

pub mod error;
pub mod math;
pub mod ordering;
pub mod random;
pub mod sqlite;

// Re-export commonly used items for convenience
pub use error::{Error, Result};
pub use math::add;
pub use ordering::compare_by_key;
pub use random::{random_alphabets, AlphaGenerator};
pub use sqlite::{query_rows, try_query_rows, Value};
