use core::{error, fmt};

use crate::info::{ReflectKind, ReflectKindError};

/// A enumeration of all error outcomes
/// that might happen when running [`try_apply`](crate::Reflect::try_apply).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApplyError {
    /// Tried to apply incompatible types.
    MismatchedTypes {
        from_type: &'static str,
        to_type: &'static str,
    },
    /// Attempted to apply the wrong [kind](ReflectKind) to a type, e.g. a record to a number.
    MismatchedKinds {
        from_kind: ReflectKind,
        to_kind: ReflectKind,
    },
    /// Attempted to apply a record whose field names differ from the target's.
    MismatchedFields {
        from_type: &'static str,
        to_type: &'static str,
    },
}

impl fmt::Display for ApplyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MismatchedTypes { from_type, to_type } => {
                write!(f, "attempted to apply `{from_type}` to `{to_type}`")
            }
            Self::MismatchedKinds { from_kind, to_kind } => {
                write!(f, "attempted to apply `{from_kind}` to `{to_kind}`")
            }
            Self::MismatchedFields { from_type, to_type } => {
                write!(
                    f,
                    "attempted to apply `{from_type}` to `{to_type}` with different fields"
                )
            }
        }
    }
}

impl error::Error for ApplyError {}

impl From<ReflectKindError> for ApplyError {
    #[inline]
    fn from(value: ReflectKindError) -> Self {
        Self::MismatchedKinds {
            from_kind: value.received,
            to_kind: value.expected,
        }
    }
}
