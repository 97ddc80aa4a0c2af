use rusqlite::ffi::ErrorCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    /// Primary key, NOT NULL, foreign key or check constraint rejected the write.
    #[error("constraint violation: {message}")]
    Constraint { message: String },
    #[error("sqlite error: {0}")]
    Sqlite(#[source] rusqlite::Error),
}

impl StorageError {
    pub fn is_constraint(&self) -> bool {
        matches!(self, StorageError::Constraint { .. })
    }
}

impl From<rusqlite::Error> for StorageError {
    fn from(err: rusqlite::Error) -> Self {
        match err {
            rusqlite::Error::SqliteFailure(ref failure, ref msg)
                if failure.code == ErrorCode::ConstraintViolation =>
            {
                StorageError::Constraint {
                    message: msg.clone().unwrap_or_else(|| failure.to_string()),
                }
            }
            other => StorageError::Sqlite(other),
        }
    }
}

pub type Result<T> = std::result::Result<T, StorageError>;
