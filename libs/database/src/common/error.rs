/// Failures of pool setup and health probes.
#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    /// Every attempt allowed by the retry policy failed; `source` is the last error
    #[cfg(feature = "postgres")]
    #[error("could not connect to PostgreSQL after {attempts} attempt(s): {source}")]
    ConnectionFailed {
        attempts: u32,
        #[source]
        source: sea_orm::DbErr,
    },

    #[error("Health check failed: {0}")]
    HealthCheckFailed(String),
}

pub type DatabaseResult<T> = Result<T, DatabaseError>;
