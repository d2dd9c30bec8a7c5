//! String-to-primitive coercion for values coming from untyped sources.

use std::num::ParseIntError;
use std::str::FromStr;

use thiserror::Error;

use super::record::Scalar;
use super::ConfigError;

/// Why a raw string could not be turned into the requested primitive.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoerceError {
    #[error("{0}")]
    Integer(#[from] ParseIntError),

    #[error("expected one of 1, t, true, 0, f, false")]
    Boolean,
}

/// Parses a base-10 integer of any width.
pub fn integer<T>(raw: &str) -> Result<T, CoerceError>
where
    T: FromStr<Err = ParseIntError>,
{
    Ok(raw.parse::<T>()?)
}

/// Parses the canonical boolean tokens.
pub fn boolean(raw: &str) -> Result<bool, CoerceError> {
    match raw {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
        _ => Err(CoerceError::Boolean),
    }
}

/// Coerces `raw` into `target`, attributing a failure to `key`.
///
/// On error the target keeps its previous value.
pub fn assign(key: &str, raw: &str, target: &mut dyn Scalar) -> Result<(), ConfigError> {
    target.store(raw).map_err(|source| ConfigError::TypeMismatch {
        key: key.to_string(),
        expected: target.kind(),
        source,
    })
}
