//! File-based configuration source.
//!
//! Unlike the environment and database sources, the file is not bound
//! field by field. The TOML document is merged over a snapshot of the
//! record and the result is decoded back through serde, so the file layer
//! follows the record's serde names and case-insensitive TOML keys rather
//! than the path conventions of the other sources. A file can therefore
//! reach fields (or serde renames) that no environment variable or table
//! row addresses in the same way.

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use toml::{Table, Value};

use super::ConfigError;

/// Overlays the TOML file at `path` onto `record`.
///
/// Keys missing from the file keep their current values and unknown keys
/// are ignored. On error the record is left exactly as it was.
///
/// The snapshot is a TOML table, so an unsigned field currently holding a
/// value above `i64::MAX` fails with [`ConfigError::SnapshotError`].
pub fn apply_file<R>(record: &mut R, path: impl AsRef<Path>) -> Result<(), ConfigError>
where
    R: Serialize + DeserializeOwned,
{
    let path = path.as_ref();
    let overlay = load_config_file(path)?;

    let mut merged = match Value::try_from(&*record)? {
        Value::Table(table) => table,
        _ => Table::new(),
    };
    deep_merge(&mut merged, overlay);

    *record = Value::Table(merged)
        .try_into()
        .map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;
    Ok(())
}

/// Loads and parses a TOML config file.
fn load_config_file(path: &Path) -> Result<Table, ConfigError> {
    match std::fs::read_to_string(path) {
        Ok(contents) => toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        }),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            Err(ConfigError::FileNotFound(PathBuf::from(path)))
        }
        Err(e) => Err(ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}

/// Merges `overlay` into `base`, matching keys without regard to ASCII case.
///
/// Nested tables merge recursively; any other value replaces the base value.
fn deep_merge(base: &mut Table, overlay: Table) {
    for (key, value) in overlay {
        let key = base
            .keys()
            .find(|existing| existing.eq_ignore_ascii_case(&key))
            .cloned()
            .unwrap_or(key);

        match (base.get_mut(&key), value) {
            (Some(Value::Table(base_table)), Value::Table(overlay_table)) => {
                deep_merge(base_table, overlay_table);
            }
            (_, value) => {
                base.insert(key, value);
            }
        }
    }
}
