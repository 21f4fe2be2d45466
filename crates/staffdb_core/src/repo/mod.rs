//! Repository layer: SQL mapping and identity maps.
//!
//! # Responsibility
//! - Map entity operations to single SQL statements.
//! - Keep one live shared instance per persisted row (`IdentityMap`).
//!
//! # Invariants
//! - Every write statement commits on its own; there is no cross-row
//!   transaction.
//! - Store errors are returned unchanged inside `RepoError::Db`.

use crate::db::DbError;
use crate::model::ValidationError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod department_repo;
pub mod employee_repo;
pub mod identity_map;
pub mod lookup;
pub mod review_repo;

pub type RepoResult<T> = Result<T, RepoError>;

/// Error returned by entity constructors and repository operations.
#[derive(Debug)]
pub enum RepoError {
    /// A field failed its constraint.
    Validation(ValidationError),
    /// `update` was called on an entity that was never saved.
    NotPersisted { entity: &'static str },
    /// SQLite or connection failure.
    Db(DbError),
    /// A stored row cannot be mapped to a valid entity.
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::NotPersisted { entity } => {
                write!(f, "cannot update an unsaved {entity} record")
            }
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::NotPersisted { .. } => None,
            Self::InvalidData(_) => None,
        }
    }
}

impl From<ValidationError> for RepoError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
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

pub(crate) fn invalid_row(table: &str, id: i64, err: ValidationError) -> RepoError {
    RepoError::InvalidData(format!("{table} row id={id}: {err}"))
}
