//! Depth-first binding of string sources onto a record.

use tracing::trace;

use super::coerce;
use super::key::KeyConvention;
use super::record::{FieldVisitor, Record, Slot};
use super::ConfigError;

/// Source lookup: synthesized key to raw value.
pub type Lookup<'a> = &'a dyn Fn(&str) -> Option<String>;

/// Walks `record` in declaration order, assigning every leaf whose key
/// resolves to a non-empty value.
///
/// Stops at the first failure. Fields assigned before it keep their new
/// values; fields after it are not visited.
pub fn bind(
    record: &mut dyn Record,
    convention: &KeyConvention,
    lookup: Lookup<'_>,
) -> Result<(), ConfigError> {
    let mut binder = Binder {
        path: Vec::new(),
        convention,
        lookup,
    };
    record.visit_fields(&mut binder)
}

struct Binder<'a> {
    path: Vec<&'static str>,
    convention: &'a KeyConvention,
    lookup: Lookup<'a>,
}

impl Binder<'_> {
    fn resolve(&self) -> (String, Option<String>) {
        let key = self.convention.synthesize(&self.path);
        let raw = (self.lookup)(&key).filter(|value| !value.is_empty());
        (key, raw)
    }

    fn bind_slot(&mut self, slot: Slot<'_>) -> Result<(), ConfigError> {
        match slot {
            Slot::Record(nested) => nested.visit_fields(self),
            Slot::Scalar(scalar) => {
                if let (key, Some(raw)) = self.resolve() {
                    coerce::assign(&key, &raw, scalar)?;
                    trace!(%key, "assigned config value");
                }
                Ok(())
            }
            Slot::Unsupported(kind) => match self.resolve() {
                (key, Some(_)) => Err(ConfigError::UnsupportedKind { key, kind }),
                (_, None) => Ok(()),
            },
        }
    }
}

impl FieldVisitor for Binder<'_> {
    fn visit(&mut self, name: &'static str, slot: Slot<'_>) -> Result<(), ConfigError> {
        self.path.push(name);
        let result = self.bind_slot(slot);
        self.path.pop();
        result
    }
}
