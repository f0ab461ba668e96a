use crate::Reflect;
use crate::info::{ReflectKind, ReflectKindError};
use crate::ops::Struct;

// -----------------------------------------------------------------------------
// ReflectRef

/// An immutable, kind specific view of a reflected value.
///
/// Obtained by [`Reflect::reflect_ref`].
#[derive(Clone, Copy)]
pub enum ReflectRef<'a> {
    Struct(&'a dyn Struct),
    Opaque(&'a dyn Reflect),
}

impl<'a> ReflectRef<'a> {
    /// Returns the [`ReflectKind`] of this view.
    #[inline]
    pub const fn kind(&self) -> ReflectKind {
        match self {
            Self::Struct(_) => ReflectKind::Struct,
            Self::Opaque(_) => ReflectKind::Opaque,
        }
    }

    /// Returns the record view, or the actual kind.
    #[inline]
    pub fn as_struct(self) -> Result<&'a dyn Struct, ReflectKindError> {
        match self {
            Self::Struct(value) => Ok(value),
            Self::Opaque(_) => Err(ReflectKindError {
                expected: ReflectKind::Struct,
                received: ReflectKind::Opaque,
            }),
        }
    }

    /// Returns the opaque value, or the actual kind.
    #[inline]
    pub fn as_opaque(self) -> Result<&'a dyn Reflect, ReflectKindError> {
        match self {
            Self::Opaque(value) => Ok(value),
            Self::Struct(_) => Err(ReflectKindError {
                expected: ReflectKind::Opaque,
                received: ReflectKind::Struct,
            }),
        }
    }
}

// -----------------------------------------------------------------------------
// ReflectMut

/// A mutable, kind specific view of a reflected value.
///
/// Obtained by [`Reflect::reflect_mut`].
pub enum ReflectMut<'a> {
    Struct(&'a mut dyn Struct),
    Opaque(&'a mut dyn Reflect),
}

impl<'a> ReflectMut<'a> {
    /// Returns the [`ReflectKind`] of this view.
    #[inline]
    pub const fn kind(&self) -> ReflectKind {
        match self {
            Self::Struct(_) => ReflectKind::Struct,
            Self::Opaque(_) => ReflectKind::Opaque,
        }
    }

    /// Returns the record view, or the actual kind.
    #[inline]
    pub fn as_struct(self) -> Result<&'a mut dyn Struct, ReflectKindError> {
        match self {
            Self::Struct(value) => Ok(value),
            Self::Opaque(_) => Err(ReflectKindError {
                expected: ReflectKind::Struct,
                received: ReflectKind::Opaque,
            }),
        }
    }

    /// Returns the opaque value, or the actual kind.
    #[inline]
    pub fn as_opaque(self) -> Result<&'a mut dyn Reflect, ReflectKindError> {
        match self {
            Self::Opaque(value) => Ok(value),
            Self::Struct(_) => Err(ReflectKindError {
                expected: ReflectKind::Opaque,
                received: ReflectKind::Struct,
            }),
        }
    }
}
