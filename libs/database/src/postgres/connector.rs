use sea_orm::{Database, DatabaseConnection, DbErr};
use tracing::info;

use super::PostgresConfig;
use crate::common::{DatabaseError, DatabaseResult, RetryConfig, retry_with_backoff};

/// Open a pool with [`PostgresConfig`] defaults.
pub async fn connect(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    connect_from_config(PostgresConfig::new(database_url)).await
}

/// Open a pool sized and timed according to `config`.
///
/// Acquiring a connection from an exhausted pool waits up to
/// `acquire_timeout_secs` before failing.
pub async fn connect_from_config(config: PostgresConfig) -> Result<DatabaseConnection, DbErr> {
    let max_connections = config.max_connections;
    let db = Database::connect(config.into_connect_options()).await?;

    info!(max_connections, "Connected to PostgreSQL");
    Ok(db)
}

/// [`connect_from_config`] with exponential backoff, for startup while the
/// database may still be coming up.
pub async fn connect_from_config_with_retry(
    config: PostgresConfig,
    retry_config: Option<RetryConfig>,
) -> DatabaseResult<DatabaseConnection> {
    let retry_config = retry_config.unwrap_or_default();
    let attempts = retry_config.max_retries + 1;

    retry_with_backoff(|| connect_from_config(config.clone()), retry_config)
        .await
        .map_err(|source| DatabaseError::ConnectionFailed { attempts, source })
}
