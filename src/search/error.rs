//! Error types for query operations

use crate::error::AppError;

/// Result type for query operations
pub type QueryResult<T> = std::result::Result<T, QueryError>;

/// Errors raised while evaluating a query against the catalog
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    /// Release label too short to carry a trailing year
    #[error("Release label too short for a year: {0:?}")]
    LabelTooShort(String),

    /// Trailing four characters are not a year
    #[error("Release label has no trailing year: {0:?}")]
    MalformedYear(String),
}

impl From<QueryError> for AppError {
    fn from(err: QueryError) -> Self {
        AppError::Validation(err.to_string())
    }
}
