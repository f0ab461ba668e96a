use alloc::boxed::Box;
use core::any::{Any, TypeId};
use core::fmt;

use crate::info::{DynamicTypePath, DynamicTyped, ReflectKind};
use crate::ops::{ApplyError, ReflectMut, ReflectRef};

// -----------------------------------------------------------------------------
// Reflect

/// The foundational trait for runtime access to record data.
///
/// A `Reflect` value can report its type information, expose its fields
/// through [`Struct`] (for records) or stay atomic (for opaque leaves), and
/// accept a type-checked assignment from another reflected value.
///
/// # Recommendations
///
/// Use [the derive macro](crate::derive::Reflect) for records and
/// [`impl_reflect_opaque!`](crate::impl_reflect_opaque) for leaf values
/// rather than implementing this trait by hand.
///
/// # Type Identification
///
/// [`Any::type_id`] on `Box<dyn Reflect>` returns the id of the box.
/// Use [`Reflect::ty_id`] instead:
///
/// ```rust
/// # use tm_reflect::Reflect;
/// # use core::any::{Any, TypeId};
/// let x: Box<dyn Reflect> = 32_i32.into_boxed_reflect();
///
/// assert!(x.type_id() != TypeId::of::<i32>());
/// assert!(x.ty_id() == TypeId::of::<i32>());
/// ```
///
/// # Type Casting
///
/// [`reflect_ref`] and [`reflect_mut`] expose the [kind](ReflectKind) specific
/// view, `downcast_ref` and `downcast_mut` the concrete type:
///
/// ```rust
/// # use tm_reflect::Reflect;
/// let x: Box<dyn Reflect> = 10_i32.into_boxed_reflect();
/// assert_eq!(x.downcast_ref::<i32>(), Some(&10));
/// assert!(x.reflect_ref().as_struct().is_err());
/// ```
///
/// [`Struct`]: crate::ops::Struct
/// [`reflect_ref`]: Reflect::reflect_ref
/// [`reflect_mut`]: Reflect::reflect_mut
pub trait Reflect: DynamicTypePath + DynamicTyped + Send + Sync + Any {
    /// Casts this type to a fully-reflected value.
    #[inline(always)]
    fn as_reflect(&self) -> &dyn Reflect
    where
        Self: Sized,
    {
        self
    }

    /// Casts this type to a mutable, fully-reflected value.
    #[inline(always)]
    fn as_reflect_mut(&mut self) -> &mut dyn Reflect
    where
        Self: Sized,
    {
        self
    }

    /// Casts this type to a boxed, fully-reflected value.
    ///
    /// # Example
    ///
    /// ```
    /// use tm_reflect::Reflect;
    ///
    /// let r = 32_u8.into_boxed_reflect();
    /// assert!(r.is::<u8>());
    /// ```
    #[inline(always)]
    fn into_boxed_reflect(self) -> Box<dyn Reflect>
    where
        Self: Sized,
    {
        Box::new(self)
    }

    /// Return the [`TypeId`] of underlying type.
    #[inline]
    fn ty_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    /// Returns the [kind](ReflectKind) of this value.
    ///
    /// ```
    /// # use tm_reflect::{Reflect, info::ReflectKind};
    /// assert_eq!(String::new().reflect_kind(), ReflectKind::Opaque);
    /// ```
    fn reflect_kind(&self) -> ReflectKind;

    /// Returns an immutable, kind specific view of this value.
    fn reflect_ref(&self) -> ReflectRef<'_>;

    /// Returns a mutable, kind specific view of this value.
    fn reflect_mut(&mut self) -> ReflectMut<'_>;

    /// Assigns a reflected value to this value.
    ///
    /// # Apply Rules
    ///
    /// - Different [`ReflectKind`]s never apply.
    /// - Opaque values only accept the identical type, which is cloned in.
    /// - Records accept the identical type, or another record with the same
    ///   field names in the same order whose fields apply one by one.
    ///   See [`struct_try_apply`](crate::impls::struct_try_apply).
    ///
    /// ```
    /// # use tm_reflect::Reflect;
    /// let mut x = 1_u32;
    /// x.try_apply(&7_u32).unwrap();
    /// assert_eq!(x, 7);
    ///
    /// assert!(x.try_apply(&7_i64).is_err());
    /// ```
    ///
    /// # Handling Errors
    ///
    /// A failed assignment leaves the value untouched: records check every
    /// field, recursively, before writing any of them.
    fn try_apply(&mut self, value: &dyn Reflect) -> Result<(), ApplyError>;

    /// Returns a "partial equality" comparison result.
    ///
    /// `None` means the type cannot be compared through reflection.
    #[inline]
    fn reflect_partial_eq(&self, _other: &dyn Reflect) -> Option<bool> {
        None
    }

    /// Debug formatter for the value.
    ///
    /// Records print their fields through
    /// [`struct_debug`](crate::impls::struct_debug); opaque values print
    /// `Opaque(type_path)` unless the implementation forwards to [`fmt::Debug`].
    fn reflect_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.reflect_ref() {
            ReflectRef::Struct(data) => crate::impls::struct_debug(data, f),
            ReflectRef::Opaque(_) => write!(f, "Opaque({})", self.reflect_type_path()),
        }
    }
}

impl dyn Reflect {
    /// Returns `true` if the underlying value is of type `T`.
    #[inline(always)]
    pub fn is<T: Any>(&self) -> bool {
        self.ty_id() == TypeId::of::<T>()
    }

    /// Downcasts the value to type `T` by reference.
    ///
    /// ```
    /// # use tm_reflect::Reflect;
    /// let x: Box<dyn Reflect> = 10_i32.into_boxed_reflect();
    /// assert_eq!(x.downcast_ref::<i32>(), Some(&10));
    /// assert_eq!(x.downcast_ref::<u32>(), None);
    /// ```
    #[inline]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        <dyn Any>::downcast_ref(self)
    }

    /// Downcasts the value to type `T` by mutable reference.
    #[inline]
    pub fn downcast_mut<T: Any>(&mut self) -> Option<&mut T> {
        <dyn Any>::downcast_mut(self)
    }
}

impl fmt::Debug for dyn Reflect {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.reflect_debug(f)
    }
}
