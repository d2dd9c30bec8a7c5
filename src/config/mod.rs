//! Layered configuration binding: TOML file, environment, database table.

mod bind;
mod builder;
mod coerce;
mod database;
mod dsn;
mod env;
mod error;
mod file;
mod key;
mod record;
mod sql;

#[cfg(test)]
mod testing;

pub use bind::{bind, Lookup};
pub use builder::Config;
pub use coerce::CoerceError;
pub use database::{apply_store, apply_values, KeyValueStore, ResolvedValues, Rows, DEFAULT_TABLE};
pub use dsn::{Dialect, Dsn};
pub use env::{apply_env, apply_env_with, process_env};
pub use error::{ConfigError, StoreError};
pub use file::apply_file;
pub use key::KeyConvention;
pub use record::{Field, FieldVisitor, Kind, Record, Scalar, Slot};
pub use sql::SqlStore;
