//! Environment variable configuration source.

use super::bind::bind;
use super::key::KeyConvention;
use super::record::Record;
use super::ConfigError;

/// Reads a variable from the process environment.
///
/// Unset and non-unicode variables are both treated as absent.
pub fn process_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Binds `PREFIX_SECTION_FIELD` variables of the process environment onto
/// `record`.
pub fn apply_env<R: Record>(record: &mut R, prefix: &str) -> Result<(), ConfigError> {
    apply_env_with(record, prefix, &process_env)
}

/// Same as [`apply_env`] with an explicit variable lookup.
pub fn apply_env_with<R: Record>(
    record: &mut R,
    prefix: &str,
    lookup: &dyn Fn(&str) -> Option<String>,
) -> Result<(), ConfigError> {
    bind(record, &KeyConvention::env(prefix), lookup)
}
