use thiserror::Error;

pub type DatabaseResult<T> = Result<T, DatabaseError>;

/// An error returned by the database.
#[derive(Debug, Error)]
#[error("database error: {0}")]
pub struct DatabaseError(#[from] sqlx::Error);
