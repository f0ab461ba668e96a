//! Containers for static storage of type information.
//!
//! This is usually used to implement [`Typed`](crate::info::Typed).
//!
//! - [`NonGenericTypeInfoCell`]: a [`OnceLock`] around the [`TypeInfo`].
//! - [`GenericTypeInfoCell`] and [`GenericTypePathCell`]: the `static CELL`
//!   inside a generic function is shared by every instantiation, so these
//!   key the value by [`TypeId`] behind a [`RwLock`].

use alloc::{boxed::Box, string::String};
use core::any::{Any, TypeId};
use std::sync::{OnceLock, PoisonError, RwLock};

use tm_utils::TypeIdMap;

use crate::info::TypeInfo;

mod sealed {
    use super::TypeInfo;
    use alloc::string::String;
    pub trait TypedProperty: 'static {}

    impl TypedProperty for String {}
    impl TypedProperty for TypeInfo {}
}

use sealed::TypedProperty;

/// Container for static storage of non-generic type information.
///
/// See [`NonGenericTypeInfoCell`].
pub struct NonGenericTypeCell<T: TypedProperty>(OnceLock<T>);

/// Container for static storage of non-generic type information.
///
/// See [`Typed`](crate::info::Typed) for an example.
pub type NonGenericTypeInfoCell = NonGenericTypeCell<TypeInfo>;

impl<T: TypedProperty> NonGenericTypeCell<T> {
    /// Create a empty cell.
    #[inline]
    pub const fn new() -> Self {
        Self(OnceLock::new())
    }

    /// Returns a reference to the value stored in the cell.
    ///
    /// If the cell is empty, the value is generated from the given function.
    #[inline]
    pub fn get_or_init<F>(&self, f: F) -> &T
    where
        F: FnOnce() -> T,
    {
        self.0.get_or_init(f)
    }
}

/// Container for static storage of type information with generics.
///
/// See [`GenericTypeInfoCell`] and [`GenericTypePathCell`].
pub struct GenericTypeCell<T: TypedProperty>(RwLock<TypeIdMap<&'static T>>);

/// Container for static storage of type information with generics.
///
/// ```
/// use tm_reflect::{
///     impls::GenericTypeInfoCell,
///     info::{OpaqueInfo, TypeInfo, TypePath, Typed},
/// };
///
/// struct Wrapper<T>(T);
///
/// impl<T: 'static> TypePath for Wrapper<T> {
///     fn type_path() -> &'static str { core::any::type_name::<Self>() }
///     fn type_name() -> &'static str { "Wrapper" }
/// }
///
/// impl<T: 'static> Typed for Wrapper<T> {
///     fn type_info() -> &'static TypeInfo {
///         static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
///         CELL.get_or_insert::<Self>(|| TypeInfo::Opaque(OpaqueInfo::new::<Self>()))
///     }
/// }
///
/// assert!(<Wrapper<u8>>::type_info().type_is::<Wrapper<u8>>());
/// assert!(<Wrapper<u16>>::type_info().type_is::<Wrapper<u16>>());
/// ```
pub type GenericTypeInfoCell = GenericTypeCell<TypeInfo>;

/// Container for static storage of type path with generics.
///
/// ```
/// use tm_reflect::impls::{GenericTypePathCell, concat};
///
/// fn name_of<T: 'static>(inner: &str) -> &'static str {
///     static CELL: GenericTypePathCell = GenericTypePathCell::new();
///     CELL.get_or_insert::<T>(|| concat(&["Wrapper<", inner, ">"]))
/// }
///
/// assert_eq!(name_of::<u8>("u8"), "Wrapper<u8>");
/// assert_eq!(name_of::<u8>("ignored"), "Wrapper<u8>");
/// ```
pub type GenericTypePathCell = GenericTypeCell<String>;

impl<T: TypedProperty> GenericTypeCell<T> {
    /// Create a empty cell.
    #[inline]
    pub const fn new() -> Self {
        Self(RwLock::new(TypeIdMap::new()))
    }

    /// Returns a reference to the value stored for the type `G`.
    ///
    /// If there is no entry found, a new one will be generated from the given function.
    #[inline(always)]
    pub fn get_or_insert<G: Any + ?Sized>(&self, f: impl FnOnce() -> T) -> &T {
        // Separate to reduce code compilation times
        self.get_or_insert_by_type_id(TypeId::of::<G>(), f)
    }

    #[inline(never)]
    fn get_or_insert_by_type_id(&self, type_id: TypeId, f: impl FnOnce() -> T) -> &T {
        match self.get_by_type_id(type_id) {
            Some(info) => info,
            None => self.insert_by_type_id(type_id, f()),
        }
    }

    #[inline(never)]
    fn get_by_type_id(&self, type_id: TypeId) -> Option<&'static T> {
        self.0
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&type_id)
            .copied()
    }

    #[inline(never)]
    fn insert_by_type_id(&self, type_id: TypeId, value: T) -> &'static T {
        let mut map = self.0.write().unwrap_or_else(PoisonError::into_inner);
        // Another thread may have won the race between our read and write locks.
        *map.get_or_insert(type_id, || Box::leak(Box::new(value)))
    }
}

/// An efficient string concatenation function.
///
/// This is usually used for the implementation of `TypePath`.
///
/// ```
/// use tm_reflect::impls::concat;
///
/// assert_eq!(concat(&["Vec<", "u8", ">"]), "Vec<u8>");
/// ```
pub fn concat(list: &[&str]) -> String {
    let mut s = String::with_capacity(list.iter().map(|v| v.len()).sum());
    for v in list {
        s.push_str(v);
    }
    s
}
