use thiserror::Error;

pub type RepositoryResult<T> = Result<T, RepositoryError>;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("failed to get connection from pool: {0}")]
    PoolError(#[from] diesel::r2d2::PoolError),
    #[error("database error: {0}")]
    DatabaseError(#[from] diesel::result::Error),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("validation error: {0}")]
    ValidationError(String),
}
