/// Repository error taxonomy
///
/// Every failure a repository operation can produce is one of these kinds.
/// Store-level errors are classified in exactly one place
/// ([`RepoError::from_store`]) so that callers never match on raw
/// `sqlx::Error` values.
use thiserror::Error;

/// Repository result type alias
pub type RepoResult<T> = Result<T, RepoError>;

/// Normalized outcome of a failed repository operation
#[derive(Debug, Error)]
pub enum RepoError {
    /// A required field was missing or empty, or an identifier was malformed
    #[error("{0}")]
    BadRequest(String),

    /// The operation targeted a row that does not exist
    #[error("{0} not found")]
    NotFound(&'static str),

    /// A uniqueness constraint was violated (e.g. duplicate email)
    #[error("{0}")]
    Conflict(String),

    /// The connection pool timed out waiting for a connection
    #[error("timed out waiting for a database connection")]
    PoolTimeout,

    /// The backing store is unreachable
    #[error("database connection failed: {0}")]
    Connection(String),

    /// Any other store-reported failure
    #[error("database error: {0}")]
    Store(#[source] sqlx::Error),
}

impl RepoError {
    /// Classifies a raw sqlx error into the repository taxonomy.
    ///
    /// Unique-constraint violations become [`RepoError::Conflict`] so they
    /// stay distinguishable from generic store failures; pool acquisition
    /// timeouts and transport failures are separated out because they mean
    /// the store is unreachable rather than the statement being wrong.
    pub fn from_store(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::PoolTimedOut => RepoError::PoolTimeout,
            sqlx::Error::PoolClosed => {
                RepoError::Connection("connection pool is closed".to_string())
            }
            sqlx::Error::Io(e) => RepoError::Connection(e.to_string()),
            sqlx::Error::Tls(e) => RepoError::Connection(e.to_string()),
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                RepoError::Conflict(db_err.message().to_string())
            }
            other => RepoError::Store(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_timeout_classification() {
        let err = RepoError::from_store(sqlx::Error::PoolTimedOut);
        assert!(matches!(err, RepoError::PoolTimeout));
    }

    #[test]
    fn test_pool_closed_classification() {
        let err = RepoError::from_store(sqlx::Error::PoolClosed);
        assert!(matches!(err, RepoError::Connection(_)));
    }

    #[test]
    fn test_row_not_found_is_store_error() {
        // NotFound is decided by row counts in the repository, never by sqlx
        let err = RepoError::from_store(sqlx::Error::RowNotFound);
        assert!(matches!(err, RepoError::Store(_)));
    }

    #[test]
    fn test_display_messages() {
        let err = RepoError::NotFound("User");
        assert_eq!(err.to_string(), "User not found");

        let err = RepoError::BadRequest("name must not be empty".to_string());
        assert_eq!(err.to_string(), "name must not be empty");

        let err = RepoError::PoolTimeout;
        assert_eq!(
            err.to_string(),
            "timed out waiting for a database connection"
        );
    }
}
