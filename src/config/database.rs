//! Database-backed configuration source.
//!
//! The whole key-value table is drained into a [`ResolvedValues`] snapshot
//! first; binding only ever reads that snapshot.

use std::collections::BTreeMap;

use tracing::{debug, warn};

use super::bind::bind;
use super::key::KeyConvention;
use super::record::Record;
use super::{ConfigError, StoreError};

/// Table name used when none is configured.
pub const DEFAULT_TABLE: &str = "config";

/// Row iterator returned by [`KeyValueStore::query_pairs`].
pub type Rows<'a> = Box<dyn Iterator<Item = Result<(String, String), StoreError>> + 'a>;

/// An open connection able to list the `key`/`value` rows of a table.
///
/// The store is consumed by [`apply_store`], which closes it on every exit
/// path.
pub trait KeyValueStore {
    fn query_pairs(&mut self, table: &str) -> Result<Rows<'_>, StoreError>;

    fn close(self) -> Result<(), StoreError>;
}

/// Flat, normalized snapshot of a key-value table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedValues {
    values: BTreeMap<String, String>,
}

impl ResolvedValues {
    /// Drains every row of `table`. Keys are trimmed and lower-cased; when
    /// two rows collapse onto the same key the later one wins.
    pub fn drain<S: KeyValueStore>(store: &mut S, table: &str) -> Result<Self, ConfigError> {
        validate_table_name(table)?;

        let rows = store
            .query_pairs(table)
            .map_err(|source| ConfigError::QueryError {
                table: table.to_string(),
                source,
            })?;

        let mut values = BTreeMap::new();
        for row in rows {
            let (key, value) = row.map_err(|source| ConfigError::ScanError {
                table: table.to_string(),
                source,
            })?;
            let key = normalize_key(&key);
            if values.insert(key.clone(), value).is_some() {
                warn!(%key, table, "duplicate config key, later row wins");
            }
        }

        debug!(table, count = values.len(), "resolved config values from database");
        Ok(Self { values })
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl FromIterator<(String, String)> for ResolvedValues {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(key, value)| (normalize_key(&key), value))
                .collect(),
        }
    }
}

/// Binds the rows of `table` onto `record`, closing `store` afterwards.
pub fn apply_store<R, S>(record: &mut R, mut store: S, table: &str) -> Result<(), ConfigError>
where
    R: Record,
    S: KeyValueStore,
{
    let resolved = ResolvedValues::drain(&mut store, table);
    if let Err(e) = store.close() {
        warn!(error = %e, "failed to close config database connection");
    }
    apply_values(record, &resolved?)
}

/// Binds an already resolved snapshot onto `record`.
pub fn apply_values<R: Record>(record: &mut R, values: &ResolvedValues) -> Result<(), ConfigError> {
    let lookup = |key: &str| values.get(key).map(str::to_string);
    bind(record, &KeyConvention::Database, &lookup)
}

fn normalize_key(key: &str) -> String {
    key.trim().to_lowercase()
}

/// Accepts plain or schema-qualified SQL identifiers.
fn validate_table_name(table: &str) -> Result<(), ConfigError> {
    let valid_part = |part: &str| {
        part.chars()
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
            && part.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
    };
    if table.split('.').all(valid_part) {
        Ok(())
    } else {
        Err(ConfigError::InvalidTableName(table.to_string()))
    }
}
