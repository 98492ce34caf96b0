//! Storage-specific error types for SQLite operations.
//!
//! This module provides error types that wrap Diesel-specific errors and convert
//! them to the database-agnostic error types defined in `stakebook_core`.

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use thiserror::Error;
use stakebook_core::errors::{DatabaseError, Error};

/// Storage-specific errors that wrap Diesel and r2d2 types.
///
/// These errors are internal to the storage layer and are converted to
/// `stakebook_core::Error` before being returned to callers.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Database connection failed: {0}")]
    ConnectionFailed(#[from] diesel::ConnectionError),

    #[error("Connection pool error: {0}")]
    PoolError(#[from] r2d2::Error),

    #[error("Query execution failed: {0}")]
    QueryFailed(#[from] DieselError),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Writer unavailable: {0}")]
    WriterUnavailable(String),

    /// A core error raised inside a transaction; passed back unchanged.
    #[error(transparent)]
    Core(Error),
}

/// Lets write jobs return core errors from inside `immediate_transaction`.
impl From<Error> for StorageError {
    fn from(err: Error) -> Self {
        StorageError::Core(err)
    }
}

impl From<StorageError> for Error {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::ConnectionFailed(e) => {
                Error::Database(DatabaseError::ConnectionFailed(e.to_string()))
            }
            StorageError::PoolError(e) => {
                Error::Database(DatabaseError::ConnectionFailed(e.to_string()))
            }
            StorageError::QueryFailed(e) => diesel_to_core(e),
            StorageError::SerializationError(e) => Error::Database(DatabaseError::Internal(e)),
            StorageError::WriterUnavailable(e) => {
                Error::Database(DatabaseError::TransactionFailed(e))
            }
            StorageError::Core(e) => e,
        }
    }
}

fn diesel_to_core(err: DieselError) -> Error {
    match err {
        DieselError::NotFound => Error::NotFound("Record not found".to_string()),
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, info) => {
            Error::Database(DatabaseError::UniqueViolation(info.message().to_string()))
        }
        DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, info) => {
            Error::Database(DatabaseError::ForeignKeyViolation(info.message().to_string()))
        }
        DieselError::DatabaseError(DatabaseErrorKind::SerializationFailure, info) => {
            Error::Database(DatabaseError::TransactionFailed(info.message().to_string()))
        }
        DieselError::RollbackErrorOnCommit { .. }
        | DieselError::RollbackTransaction
        | DieselError::BrokenTransactionManager
        | DieselError::AlreadyInTransaction => {
            Error::Database(DatabaseError::TransactionFailed(err.to_string()))
        }
        other if is_busy(&other) => {
            Error::Database(DatabaseError::TransactionFailed(other.to_string()))
        }
        other => Error::Database(DatabaseError::QueryFailed(other.to_string())),
    }
}

/// SQLite reports lock contention as a plain error message.
fn is_busy(err: &DieselError) -> bool {
    let message = err.to_string().to_ascii_lowercase();
    message.contains("database is locked") || message.contains("database is busy")
}

/// Extension trait for easily converting Diesel Results to core Results.
///
/// This provides a `.into_core()` method on any `Result<T, diesel::result::Error>`
/// which handles the conversion through StorageError.
pub trait IntoCore<T> {
    fn into_core(self) -> stakebook_core::Result<T>;
}

impl<T> IntoCore<T> for std::result::Result<T, DieselError> {
    fn into_core(self) -> stakebook_core::Result<T> {
        self.map_err(|e| StorageError::from(e).into())
    }
}

impl<T> IntoCore<T> for std::result::Result<T, r2d2::Error> {
    fn into_core(self) -> stakebook_core::Result<T> {
        self.map_err(|e| StorageError::from(e).into())
    }
}
