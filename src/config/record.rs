//! Compile-time description of bindable records.
//!
//! A record type lists its fields once, in declaration order, through the
//! [`record!`](crate::record) macro. The binder walks that description
//! instead of inspecting types at run time.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use super::coerce::{self, CoerceError};
use super::ConfigError;

/// Primitive kinds a raw string can be coerced into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Integer,
    Boolean,
    String,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Kind::Integer => "integer",
            Kind::Boolean => "boolean",
            Kind::String => "string",
        })
    }
}

/// A leaf field that can be assigned from a raw string.
pub trait Scalar {
    fn kind(&self) -> Kind;

    /// Parses `raw` and overwrites the field. Leaves it untouched on error.
    fn store(&mut self, raw: &str) -> Result<(), CoerceError>;
}

/// Mutable access to one field, as seen by the binder.
pub enum Slot<'a> {
    Scalar(&'a mut dyn Scalar),
    Record(&'a mut dyn Record),
    /// A field the binder cannot assign; the label names its kind.
    Unsupported(&'static str),
}

/// Anything that can sit in a record field.
pub trait Field {
    fn slot(&mut self) -> Slot<'_>;
}

/// Receives each field of a record in declaration order.
pub trait FieldVisitor {
    fn visit(&mut self, name: &'static str, slot: Slot<'_>) -> Result<(), ConfigError>;
}

/// A nested structured value whose fields can be walked mutably.
///
/// Implement it with [`record!`](crate::record) rather than by hand.
pub trait Record {
    fn visit_fields(&mut self, visitor: &mut dyn FieldVisitor) -> Result<(), ConfigError>;
}

/// Describes the fields of one or more structs so they can be bound.
///
/// Field names become path segments; `as "name"` overrides the segment.
///
/// ```
/// use tiered_config::record;
///
/// #[derive(Default)]
/// struct Server {
///     host: String,
///     port: u16,
/// }
///
/// #[derive(Default)]
/// struct AppConfig {
///     server: Server,
///     debug: bool,
/// }
///
/// record! {
///     Server { host, port }
///     AppConfig { server, debug as "verbose" }
/// }
/// ```
#[macro_export]
macro_rules! record {
    (@name $field:ident) => {
        ::std::stringify!($field)
    };
    (@name $field:ident $name:literal) => {
        $name
    };
    ($($ty:ident { $($field:ident $(as $name:literal)?),* $(,)? })+) => {
        $(
            impl $crate::Record for $ty {
                fn visit_fields(
                    &mut self,
                    visitor: &mut dyn $crate::FieldVisitor,
                ) -> ::std::result::Result<(), $crate::ConfigError> {
                    $(
                        visitor.visit(
                            $crate::record!(@name $field $($name)?),
                            $crate::Field::slot(&mut self.$field),
                        )?;
                    )*
                    ::std::result::Result::Ok(())
                }
            }

            impl $crate::Field for $ty {
                fn slot(&mut self) -> $crate::Slot<'_> {
                    $crate::Slot::Record(self)
                }
            }
        )+
    };
}

macro_rules! integer_fields {
    ($($t:ty),*) => {
        $(
            impl Scalar for $t {
                fn kind(&self) -> Kind {
                    Kind::Integer
                }

                fn store(&mut self, raw: &str) -> Result<(), CoerceError> {
                    *self = coerce::integer(raw)?;
                    Ok(())
                }
            }

            impl Field for $t {
                fn slot(&mut self) -> Slot<'_> {
                    Slot::Scalar(self)
                }
            }
        )*
    };
}

// No 128-bit impls: the file layer round-trips records through TOML, whose
// integers are 64-bit signed.
integer_fields!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl Scalar for bool {
    fn kind(&self) -> Kind {
        Kind::Boolean
    }

    fn store(&mut self, raw: &str) -> Result<(), CoerceError> {
        *self = coerce::boolean(raw)?;
        Ok(())
    }
}

impl Field for bool {
    fn slot(&mut self) -> Slot<'_> {
        Slot::Scalar(self)
    }
}

impl Scalar for String {
    fn kind(&self) -> Kind {
        Kind::String
    }

    fn store(&mut self, raw: &str) -> Result<(), CoerceError> {
        raw.clone_into(self);
        Ok(())
    }
}

impl Field for String {
    fn slot(&mut self) -> Slot<'_> {
        Slot::Scalar(self)
    }
}

// Present so records using these types still compile; a value supplied
// for them is rejected by the binder.
impl Field for f32 {
    fn slot(&mut self) -> Slot<'_> {
        Slot::Unsupported("float")
    }
}

impl Field for f64 {
    fn slot(&mut self) -> Slot<'_> {
        Slot::Unsupported("float")
    }
}

impl<T> Field for Option<T> {
    fn slot(&mut self) -> Slot<'_> {
        Slot::Unsupported("optional")
    }
}

impl<T> Field for Vec<T> {
    fn slot(&mut self) -> Slot<'_> {
        Slot::Unsupported("sequence")
    }
}

impl<K, V, S> Field for HashMap<K, V, S> {
    fn slot(&mut self) -> Slot<'_> {
        Slot::Unsupported("map")
    }
}

impl<K, V> Field for BTreeMap<K, V> {
    fn slot(&mut self) -> Slot<'_> {
        Slot::Unsupported("map")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::testing::{Section1, TestConf};

    #[derive(Default)]
    struct Names(Vec<&'static str>);

    impl FieldVisitor for Names {
        fn visit(&mut self, name: &'static str, slot: Slot<'_>) -> Result<(), ConfigError> {
            self.0.push(name);
            if let Slot::Record(nested) = slot {
                nested.visit_fields(self)?;
            }
            Ok(())
        }
    }

    #[test]
    fn test_fields_visited_in_declaration_order() {
        let mut conf = TestConf::default();
        let mut names = Names::default();
        conf.visit_fields(&mut names).unwrap();
        assert_eq!(
            names.0,
            vec![
                "section1", "varint1", "varstring1", "varbool1", "section2", "varint2",
                "varstring2", "varbool2",
            ]
        );
    }

    #[test]
    fn test_renamed_field_uses_literal() {
        struct Renamed {
            inner: i64,
        }
        crate::record! { Renamed { inner as "Outer" } }

        let mut value = Renamed { inner: 0 };
        let mut names = Names::default();
        value.visit_fields(&mut names).unwrap();
        assert_eq!(names.0, vec!["Outer"]);
    }

    #[test]
    fn test_slots_report_kinds() {
        let mut section = Section1::default();
        assert!(matches!(section.slot(), Slot::Record(_)));

        let mut flag = false;
        match flag.slot() {
            Slot::Scalar(scalar) => assert_eq!(scalar.kind(), Kind::Boolean),
            _ => panic!("bool should be a scalar"),
        }

        let mut ratio = 0.5_f64;
        assert!(matches!(ratio.slot(), Slot::Unsupported("float")));

        let mut tags: Vec<String> = Vec::new();
        assert!(matches!(tags.slot(), Slot::Unsupported("sequence")));
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(Kind::Integer.to_string(), "integer");
        assert_eq!(Kind::Boolean.to_string(), "boolean");
        assert_eq!(Kind::String.to_string(), "string");
    }
}
