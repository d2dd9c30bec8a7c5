//! `sqlx`-backed key-value store for Postgres and MySQL.

use sqlx::any::install_default_drivers;
use sqlx::{AnyConnection, Connection, Row};
use tokio::runtime::{Builder, Runtime};
use tracing::debug;

use super::database::{KeyValueStore, Rows};
use super::dsn::Dsn;
use super::{ConfigError, StoreError};

/// A single blocking connection to the configuration database.
///
/// Owns a current-thread runtime so callers need no async context.
pub struct SqlStore {
    runtime: Runtime,
    conn: AnyConnection,
}

impl SqlStore {
    pub fn connect(dsn: &Dsn) -> Result<Self, ConfigError> {
        install_default_drivers();

        let connection_error = |source: StoreError| ConfigError::ConnectionError {
            dsn: dsn.redacted(),
            source,
        };

        let runtime = Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| connection_error(e.into()))?;
        let conn = runtime
            .block_on(AnyConnection::connect(dsn.as_str()))
            .map_err(|e| connection_error(e.into()))?;

        debug!(dsn = %dsn, dialect = %dsn.dialect(), "connected to config database");
        Ok(Self { runtime, conn })
    }
}

impl KeyValueStore for SqlStore {
    fn query_pairs(&mut self, table: &str) -> Result<Rows<'_>, StoreError> {
        let query = format!("SELECT {table}.key, {table}.value FROM {table}");
        let rows = self
            .runtime
            .block_on(sqlx::query(&query).fetch_all(&mut self.conn))?;

        Ok(Box::new(rows.into_iter().map(
            |row| -> Result<(String, String), StoreError> {
                Ok((row.try_get::<String, _>(0)?, row.try_get::<String, _>(1)?))
            },
        )))
    }

    fn close(self) -> Result<(), StoreError> {
        let Self { runtime, conn } = self;
        runtime.block_on(conn.close())?;
        Ok(())
    }
}

impl std::fmt::Debug for SqlStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqlStore").finish_non_exhaustive()
    }
}
