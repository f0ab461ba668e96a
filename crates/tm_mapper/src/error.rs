use alloc::string::String;
use core::fmt;

use thiserror::Error;
use tm_reflect::info::ReflectKind;
use tm_reflect::ops::{ApplyError, MethodError};

// -----------------------------------------------------------------------------
// Role

/// Which argument of a mapping an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// The record values are read from.
    Source,
    /// The record values are written to.
    Destination,
    /// A type passed to [`Mapper::register_info`](crate::Mapper::register_info).
    Registered,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Source => f.pad("source"),
            Self::Destination => f.pad("destination"),
            Self::Registered => f.pad("registered type"),
        }
    }
}

// -----------------------------------------------------------------------------
// MapError

/// Failure of a mapping, a registration or a compilation.
///
/// `InputShape` and `AccessorNotFound` are raised before the destination is
/// touched. `ValueNotAssignable`, `MethodShape` and `FieldPath` abort a
/// running converter; steps that already ran keep their writes.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum MapError {
    #[error("{role} `{type_path}` is not a record (kind: {kind})")]
    InputShape {
        role: Role,
        type_path: &'static str,
        kind: ReflectKind,
    },

    #[error("no {role} accessor for key `{key}`")]
    AccessorNotFound {
        key: String,
        role: Role,
        source_type: &'static str,
        destination_type: &'static str,
    },

    #[error("value of type `{value_type}` is not assignable to field `{field}`")]
    ValueNotAssignable {
        field: String,
        value_type: &'static str,
        field_type: &'static str,
        source: ApplyError,
    },

    #[error("method `{method}` of `{type_path}` cannot be called as a {expected}")]
    MethodShape {
        method: &'static str,
        type_path: &'static str,
        expected: &'static str,
    },

    #[error("field path `{path}` does not fit `{type_path}`")]
    FieldPath { type_path: &'static str, path: String },
}

impl MapError {
    /// Converts the failure of a method accessor on a `type_path` record.
    ///
    /// An argument that cannot be converted is reported like a field that
    /// cannot be assigned, with the method name in place of the field name.
    pub fn from_method(error: MethodError, type_path: &'static str) -> Self {
        match error {
            MethodError::ArgumentMismatch {
                method,
                expected,
                received,
            } => Self::ValueNotAssignable {
                field: method.into(),
                value_type: received,
                field_type: expected,
                source: ApplyError::MismatchedTypes {
                    from_type: received,
                    to_type: expected,
                },
            },
            MethodError::NotAGetter { method } => Self::MethodShape {
                method,
                type_path,
                expected: "getter",
            },
            MethodError::NotASetter { method } => Self::MethodShape {
                method,
                type_path,
                expected: "setter",
            },
            MethodError::ReceiverMismatch {
                method, received, ..
            } => Self::MethodShape {
                method,
                type_path: received,
                expected: "method of its own receiver",
            },
        }
    }

    /// Returns `true` for the errors raised before any value is written.
    pub const fn is_eager(&self) -> bool {
        matches!(self, Self::InputShape { .. } | Self::AccessorNotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use tm_reflect::info::ReflectKind;
    use tm_reflect::ops::{ApplyError, MethodError};

    use super::{MapError, Role};

    #[test]
    fn messages() {
        let err = MapError::AccessorNotFound {
            key: "q".into(),
            role: Role::Source,
            source_type: "a::A",
            destination_type: "b::B",
        };
        assert_eq!(err.to_string(), "no source accessor for key `q`");

        let err = MapError::AccessorNotFound {
            key: "address.city".into(),
            role: Role::Destination,
            source_type: "a::A",
            destination_type: "b::B",
        };
        assert_eq!(
            err.to_string(),
            "no destination accessor for key `address.city`"
        );

        let err = MapError::InputShape {
            role: Role::Source,
            type_path: "u32",
            kind: ReflectKind::Opaque,
        };
        assert_eq!(err.to_string(), "source `u32` is not a record (kind: Opaque)");
    }

    #[test]
    fn assignment_source_is_kept() {
        let err = MapError::ValueNotAssignable {
            field: "inner.b".into(),
            value_type: "alloc::string::String",
            field_type: "u64",
            source: ApplyError::MismatchedTypes {
                from_type: "alloc::string::String",
                to_type: "u64",
            },
        };
        assert_eq!(
            err.to_string(),
            "value of type `alloc::string::String` is not assignable to field `inner.b`"
        );
        assert!(core::error::Error::source(&err).is_some());
        assert!(!err.is_eager());
    }

    #[test]
    fn method_errors() {
        let err = MapError::from_method(
            MethodError::ArgumentMismatch {
                method: "set_total",
                expected: "u64",
                received: "i8",
            },
            "shop::Order",
        );
        assert!(matches!(
            err,
            MapError::ValueNotAssignable { ref field, value_type: "i8", field_type: "u64", .. }
                if field == "set_total"
        ));

        let err = MapError::from_method(MethodError::NotAGetter { method: "set_total" }, "shop::Order");
        assert_eq!(
            err,
            MapError::MethodShape {
                method: "set_total",
                type_path: "shop::Order",
                expected: "getter",
            }
        );
        assert_eq!(
            err.to_string(),
            "method `set_total` of `shop::Order` cannot be called as a getter"
        );
    }
}
