//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define data-access contracts per entity (DAO pattern).
//! - Isolate SQLite query details behind repository methods.
//!
//! # Invariants
//! - Every query binds values through parameters, never string splicing.
//! - Logical absence (no row found, nothing updated/deleted) is reported
//!   via `Option`/empty `Vec`/`false`, never as a `RepoError`. Errors are
//!   reserved for "the operation could not run".
//! - Each method opens a scoped connection and releases it on every exit
//!   path before returning.

use crate::db::DbError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod album_repo;
pub mod artist_repo;

pub type RepoResult<T> = Result<T, RepoError>;

/// Error for repository operations that could not run.
#[derive(Debug)]
pub enum RepoError {
    /// Store connectivity, syntax, or constraint failure.
    Db(DbError),
    /// A persisted row violates a model invariant (e.g. NULL artist name).
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted row: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::InvalidData(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}
