use core::any::Any;

use crate::Reflect;

// -----------------------------------------------------------------------------
// Struct trait

/// A trait for type-erased record operations via reflection.
///
/// Implemented by [`#[derive(Reflect)]`](crate::derive::Reflect) for structs
/// with named fields. Fields skipped with `#[reflect(ignore)]` are invisible
/// here.
///
/// # Examples
///
/// ```
/// use tm_reflect::{derive::Reflect, ops::Struct};
///
/// #[derive(Reflect)]
/// struct Foo {
///     a: i32,
///     b: bool,
/// }
///
/// let ts = Foo { a: 10_i32, b: true };
/// let ts_ref: &dyn Struct = &ts;
///
/// assert_eq!(ts_ref.field_len(), 2);
/// assert_eq!(ts_ref.name_at(1), Some("b"));
/// assert_eq!(ts_ref.field_as::<i32>("a"), Some(&10));
/// assert!(ts_ref.field("c").is_none());
/// ```
pub trait Struct: Reflect {
    /// Returns the value of the field named `name`.
    fn field(&self, name: &str) -> Option<&dyn Reflect>;

    /// Returns the mutable value of the field named `name`.
    ///
    /// ```
    /// # use tm_reflect::{derive::Reflect, ops::Struct};
    /// #[derive(Reflect)]
    /// struct Foo { a: i32 }
    ///
    /// let mut ts = Foo { a: 1 };
    /// *ts.field_mut("a").unwrap().downcast_mut::<i32>().unwrap() = 42;
    /// assert_eq!(ts.a, 42);
    /// ```
    fn field_mut(&mut self, name: &str) -> Option<&mut dyn Reflect>;

    /// Returns the value of the field at `index` in declaration order.
    fn field_at(&self, index: usize) -> Option<&dyn Reflect>;

    /// Returns the mutable value of the field at `index`.
    fn field_at_mut(&mut self, index: usize) -> Option<&mut dyn Reflect>;

    /// Returns the name of the field at `index`.
    fn name_at(&self, index: usize) -> Option<&str>;

    /// Returns the number of fields.
    fn field_len(&self) -> usize;

    /// Returns an iterator over `(name, value)` in declaration order.
    fn iter_fields(&self) -> StructFieldIter<'_>;
}

impl dyn Struct {
    /// Returns the field named `name` downcast to `T`.
    #[inline]
    pub fn field_as<T: Any>(&self, name: &str) -> Option<&T> {
        self.field(name)?.downcast_ref::<T>()
    }

    /// Returns the field named `name` mutably downcast to `T`.
    #[inline]
    pub fn field_mut_as<T: Any>(&mut self, name: &str) -> Option<&mut T> {
        self.field_mut(name)?.downcast_mut::<T>()
    }
}

// -----------------------------------------------------------------------------
// StructFieldIter

/// An iterator over the `(name, value)` pairs of a [`Struct`].
pub struct StructFieldIter<'a> {
    struct_val: &'a dyn Struct,
    index: usize,
}

impl<'a> StructFieldIter<'a> {
    /// Creates a new iterator for the given struct.
    #[inline(always)]
    pub const fn new(value: &'a dyn Struct) -> Self {
        StructFieldIter {
            struct_val: value,
            index: 0,
        }
    }
}

impl<'a> Iterator for StructFieldIter<'a> {
    type Item = (&'a str, &'a dyn Reflect);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let value = self.struct_val.field_at(self.index)?;
        let name = self.struct_val.name_at(self.index)?;
        self.index += 1;
        Some((name, value))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let size = self.struct_val.field_len() - self.index;
        (size, Some(size))
    }
}

impl ExactSizeIterator for StructFieldIter<'_> {}
