//! # Error Handling
//!
//! Domain-level errors shared by the provider service and repository.
//! Storage failures stay opaque except for the "no active record" case,
//! which is reported as [`DomainError::NotFound`].

use sea_orm::{DbErr, RuntimeErr, SqlErr};
use thiserror::Error;

/// Errors returned by [`crate::domain::ProviderService`] and
/// [`crate::domain::ProviderRepository`] operations.
#[derive(Debug, Error)]
pub enum DomainError {
    /// No active record matched the lookup key.
    #[error("record not found")]
    NotFound,
    /// The short name is already held by another active provider.
    #[error("provider with short name '{0}' already exists")]
    Conflict(String),
    /// Any other storage failure (constraint violation, connection loss, bad query).
    #[error("database error: {0}")]
    Database(#[from] DbErr),
}

impl DomainError {
    /// Returns `true` for the distinguished not-found condition.
    pub fn is_not_found(&self) -> bool {
        matches!(self, DomainError::NotFound)
    }

    /// Returns `true` when the wrapped storage error is a unique constraint violation.
    pub fn is_unique_violation(&self) -> bool {
        match self {
            DomainError::Database(err) => is_unique_violation(err),
            _ => false,
        }
    }
}

fn is_unique_violation(error: &DbErr) -> bool {
    const PG_UNIQUE: &str = "23505";
    const MYSQL_DUPLICATE_CODES: &[&str] = &["1022", "1062", "1169", "1586"];
    const SQLITE_DUPLICATE_CODES: &[&str] = &["1555", "2067"];

    if matches!(error.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) {
        return true;
    }

    let runtime_err = match error {
        DbErr::Query(RuntimeErr::SqlxError(sqlx_err))
        | DbErr::Exec(RuntimeErr::SqlxError(sqlx_err)) => sqlx_err,
        _ => return false,
    };

    let Some(db_error) = runtime_err.as_database_error() else {
        return false;
    };

    if db_error.is_unique_violation() {
        return true;
    }

    db_error.code().is_some_and(|code| {
        let code: &str = code.as_ref();
        code == PG_UNIQUE
            || MYSQL_DUPLICATE_CODES.contains(&code)
            || SQLITE_DUPLICATE_CODES.contains(&code)
    })
}
