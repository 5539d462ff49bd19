use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Not found")]
    NotFound,

    #[error("An athlete with national ID {0} already exists")]
    DuplicateNationalId(String),

    #[error("{0}")]
    InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, StorageError>;

impl StorageError {
    pub fn is_unique_violation(&self) -> bool {
        matches!(
            self,
            StorageError::Database(sqlx::Error::Database(e)) if e.is_unique_violation()
        )
    }

    /// The store could not be reached at all, as opposed to rejecting a query.
    pub fn is_unavailable(&self) -> bool {
        matches!(
            self,
            StorageError::Database(
                sqlx::Error::Io(_)
                    | sqlx::Error::PoolTimedOut
                    | sqlx::Error::PoolClosed
                    | sqlx::Error::WorkerCrashed
            )
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_errors_are_unavailable() {
        assert!(StorageError::Database(sqlx::Error::PoolTimedOut).is_unavailable());
        assert!(StorageError::Database(sqlx::Error::PoolClosed).is_unavailable());
    }

    #[test]
    fn test_row_not_found_is_not_unavailable() {
        let err = StorageError::Database(sqlx::Error::RowNotFound);
        assert!(!err.is_unavailable());
        assert!(!err.is_unique_violation());
    }

    #[test]
    fn test_duplicate_message_names_national_id() {
        let err = StorageError::DuplicateNationalId("111".to_string());
        assert_eq!(
            err.to_string(),
            "An athlete with national ID 111 already exists"
        );
    }
}
