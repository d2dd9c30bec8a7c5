use std::path::PathBuf;
use thiserror::Error;

use super::coerce::CoerceError;
use super::record::Kind;

/// Error produced by a key-value store backing the database source.
pub type StoreError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("failed to snapshot record before merging file values: {0}")]
    SnapshotError(#[from] toml::ser::Error),

    #[error("value of '{key}' is not a valid {expected}: {source}")]
    TypeMismatch {
        key: String,
        expected: Kind,
        source: CoerceError,
    },

    #[error("'{key}' has a value but its field kind ({kind}) cannot be bound from a string")]
    UnsupportedKind { key: String, kind: &'static str },

    #[error("failed to query key-value pairs from table '{table}': {source}")]
    QueryError { table: String, source: StoreError },

    #[error("failed to scan key-value row from table '{table}': {source}")]
    ScanError { table: String, source: StoreError },

    #[error("failed to connect to '{dsn}': {source}")]
    ConnectionError { dsn: String, source: StoreError },

    #[error("unsupported SQL dialect: '{0}'")]
    UnsupportedDialect(String),

    #[error("connection string does not name a database: {0}")]
    MissingDatabaseName(String),

    #[error("invalid table name: '{0}'")]
    InvalidTableName(String),
}
