//! Binds a nested configuration record from a TOML file, environment
//! variables and a database key-value table, in that order of precedence
//! (database wins).

pub mod config;
mod error;

pub use config::{
    apply_env, apply_file, apply_store, Config, ConfigError, Field, FieldVisitor, KeyValueStore,
    Record, Scalar, Slot,
};
pub use error::Error;
