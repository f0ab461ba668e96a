use crate::info::{Type, TypePath, impl_type_fn};

/// Metadata for types whose internals are opaque to the reflection system.
///
/// Opaque values are never decomposed: they are read and assigned as a whole,
/// for example `u64`, `String` or a timestamp.
#[derive(Debug, Clone)]
pub struct OpaqueInfo {
    ty: Type,
}

impl OpaqueInfo {
    impl_type_fn!(ty);

    /// Create a new [`OpaqueInfo`].
    #[inline]
    pub const fn new<T: TypePath + ?Sized>() -> Self {
        Self { ty: Type::of::<T>() }
    }
}
