use crate::info::{MethodInfo, OpaqueInfo, ReflectKind, ReflectKindError, StructInfo, Type};

// -----------------------------------------------------------------------------
// TypeInfo

/// Compile-time type information for reflected types.
///
/// Retrieved through [`Typed::type_info`] when the type is known, or
/// [`DynamicTyped::reflect_type_info`] from a `dyn Reflect`. Both return the
/// same `&'static` value for a given type.
///
/// [`Typed::type_info`]: crate::info::Typed::type_info
/// [`DynamicTyped::reflect_type_info`]: crate::info::DynamicTyped::reflect_type_info
#[derive(Debug, Clone)]
pub enum TypeInfo {
    Struct(StructInfo),
    Opaque(OpaqueInfo),
}

impl TypeInfo {
    /// Convert to [`StructInfo`], or fail with the actual kind.
    #[inline]
    pub const fn as_struct(&self) -> Result<&StructInfo, ReflectKindError> {
        match self {
            Self::Struct(info) => Ok(info),
            Self::Opaque(_) => Err(ReflectKindError {
                expected: ReflectKind::Struct,
                received: ReflectKind::Opaque,
            }),
        }
    }

    /// Convert to [`OpaqueInfo`], or fail with the actual kind.
    #[inline]
    pub const fn as_opaque(&self) -> Result<&OpaqueInfo, ReflectKindError> {
        match self {
            Self::Opaque(info) => Ok(info),
            Self::Struct(_) => Err(ReflectKindError {
                expected: ReflectKind::Opaque,
                received: ReflectKind::Struct,
            }),
        }
    }

    #[inline]
    pub const fn is_struct(&self) -> bool {
        matches!(self, Self::Struct(_))
    }

    /// Returns the underlying [`Type`] metadata for this `TypeInfo`.
    pub const fn ty(&self) -> &Type {
        match self {
            Self::Struct(info) => info.ty(),
            Self::Opaque(info) => info.ty(),
        }
    }

    crate::info::impl_type_fn!();

    /// Returns the [`ReflectKind`] for this `TypeInfo`.
    ///
    /// ```
    /// use tm_reflect::info::{Typed, ReflectKind};
    ///
    /// assert_eq!(i32::type_info().kind(), ReflectKind::Opaque);
    /// ```
    pub const fn kind(&self) -> ReflectKind {
        match self {
            Self::Struct(_) => ReflectKind::Struct,
            Self::Opaque(_) => ReflectKind::Opaque,
        }
    }

    /// Named methods of the type. Opaque types have none.
    pub fn methods(&self) -> &[MethodInfo] {
        match self {
            Self::Struct(info) => info.methods(),
            Self::Opaque(_) => &[],
        }
    }
}
