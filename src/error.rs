use std::path::PathBuf;

use crate::config::ConfigError;
use thiserror::Error;

/// Top-level error type, naming the source that failed.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error("can't apply config from file '{path}': {source}")]
    File { path: PathBuf, source: ConfigError },

    #[error("can't apply config from environment (prefix '{prefix}'): {source}")]
    Env { prefix: String, source: ConfigError },

    #[error("can't dial config database '{dsn}': {source}")]
    Dial { dsn: String, source: ConfigError },

    #[error("can't apply config from database '{database}': {source}")]
    Database { database: String, source: ConfigError },
}
