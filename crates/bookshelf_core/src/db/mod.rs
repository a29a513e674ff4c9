//! SQLite storage bootstrap for the book store.
//!
//! # Responsibility
//! - Resolve storage targets (file path or transient designator).
//! - Open and configure SQLite connections.
//! - Own the `books` table DDL.
//!
//! # Invariants
//! - A connection is only handed out after its target was successfully read.
//! - Schema creation is idempotent and never clears rows.

use std::error::Error;
use std::fmt::{Display, Formatter};

mod open;
pub mod schema;
mod target;

pub use open::open_connection;
pub use target::{StoreTarget, MEMORY_DESIGNATOR};

pub type StoreResult<T> = Result<T, StoreError>;

/// Error taxonomy for book store operations.
///
/// Lookup misses are not errors; they surface as `None` or a zero row count.
#[derive(Debug)]
pub enum StoreError {
    /// The backing target could not be opened or read.
    StorageUnavailable {
        target: String,
        source: Option<rusqlite::Error>,
    },
    /// A table operation ran before `create_table`.
    SchemaMissing(&'static str),
    /// Releasing the connection failed.
    Close(rusqlite::Error),
    Sqlite(rusqlite::Error),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::StorageUnavailable {
                target,
                source: Some(err),
            } => write!(f, "storage target `{target}` is unavailable: {err}"),
            Self::StorageUnavailable {
                target,
                source: None,
            } => write!(f, "storage target `{target}` is unavailable"),
            Self::SchemaMissing(table) => {
                write!(f, "table `{table}` does not exist; call create_table first")
            }
            Self::Close(err) => write!(f, "failed to close store connection: {err}"),
            Self::Sqlite(err) => write!(f, "{err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::StorageUnavailable { source, .. } => {
                source.as_ref().map(|err| err as &(dyn Error + 'static))
            }
            Self::SchemaMissing(_) => None,
            Self::Close(err) => Some(err),
            Self::Sqlite(err) => Some(err),
        }
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}
