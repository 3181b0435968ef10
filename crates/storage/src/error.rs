use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Malformed row: {0}")]
    MalformedRow(String),
}

pub type Result<T> = std::result::Result<T, StorageError>;

impl StorageError {
    /// True when the database could not be reached at all, as opposed to a
    /// query that reached it and failed.
    pub fn is_unavailable(&self) -> bool {
        matches!(
            self,
            StorageError::Database(
                sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_)
            )
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_timeout_is_unavailable() {
        assert!(StorageError::Database(sqlx::Error::PoolTimedOut).is_unavailable());
        assert!(StorageError::Database(sqlx::Error::PoolClosed).is_unavailable());
    }

    #[test]
    fn test_malformed_row_is_not_unavailable() {
        let error = StorageError::MalformedRow("annotation_count is negative".to_string());
        assert!(!error.is_unavailable());
        assert_eq!(
            error.to_string(),
            "Malformed row: annotation_count is negative"
        );
    }

    #[test]
    fn test_row_not_found_is_not_unavailable() {
        assert!(!StorageError::Database(sqlx::Error::RowNotFound).is_unavailable());
    }
}
