use core::{error, fmt};

// -----------------------------------------------------------------------------
// ReflectKind

/// An enumeration of the "kinds" of a reflected type.
///
/// A [`ReflectKind`] is obtained via [`Reflect::reflect_kind`],
/// [`TypeInfo::kind`] or the `kind` method of [`ReflectRef`] and [`ReflectMut`].
///
/// [`Reflect::reflect_kind`]: crate::Reflect::reflect_kind
/// [`TypeInfo::kind`]: crate::info::TypeInfo::kind
/// [`ReflectRef`]: crate::ops::ReflectRef
/// [`ReflectMut`]: crate::ops::ReflectMut
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReflectKind {
    /// A record with named fields, see [`Struct`](crate::ops::Struct).
    Struct,
    /// An atomic value, copied as a whole.
    Opaque,
}

impl fmt::Display for ReflectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Struct => f.pad("Struct"),
            Self::Opaque => f.pad("Opaque"),
        }
    }
}

/// Error returned when a value or `TypeInfo` is not the expected `ReflectKind`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReflectKindError {
    pub expected: ReflectKind,
    pub received: ReflectKind,
}

impl fmt::Display for ReflectKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "reflect kind mismatch: expected {}, received {}",
            self.expected, self.received
        )
    }
}

impl error::Error for ReflectKindError {}
