//! Per-request database connections
//!
//! Each lookup opens one plain connection and closes it when the request
//! completes. There is no pool.

use sqlx::ConnectOptions;
use sqlx::PgConnection;

use super::repos::DbError;
use crate::config::DbConfig;

/// Open a single connection to the festival database.
pub async fn connect(config: &DbConfig) -> Result<PgConnection, DbError> {
    config
        .connect_options()
        .connect()
        .await
        .map_err(DbError::Connect)
}
