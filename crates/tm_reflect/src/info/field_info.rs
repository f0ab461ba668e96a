use core::any::{Any, TypeId};

use crate::info::{FieldTags, TypeInfo, Typed};

// -----------------------------------------------------------------------------
// NamedField

/// Information for a named (struct) field.
///
/// # Examples
///
/// ```
/// use tm_reflect::{derive::Reflect, info::Typed};
///
/// #[derive(Reflect)]
/// struct Foo {
///     #[reflect(tag(map = "a"))]
///     field_a: f32,
/// }
///
/// let info = Foo::type_info().as_struct().unwrap();
/// let field_info = info.field_at(0).unwrap();
///
/// assert!(field_info.type_is::<f32>());
/// assert_eq!(field_info.name(), "field_a");
/// assert_eq!(field_info.tags().get("map"), Some("a"));
/// ```
#[derive(Clone, Debug)]
pub struct NamedField {
    ty_id: TypeId,
    name: &'static str,
    // `TypeInfo` is created on first access; using a function pointer delays it.
    type_info: fn() -> &'static TypeInfo,
    tags: FieldTags,
}

impl NamedField {
    /// Creates a new [`NamedField`] for the given field `name` and type `T`.
    #[inline]
    pub const fn new<T: Typed>(name: &'static str) -> Self {
        Self {
            name,
            type_info: T::type_info,
            ty_id: TypeId::of::<T>(),
            tags: FieldTags::EMPTY,
        }
    }

    /// Replace the tags of this field.
    #[inline]
    pub const fn with_tags(self, tags: FieldTags) -> Self {
        Self { tags, ..self }
    }

    /// Returns the `TypeId`.
    #[inline]
    pub const fn ty_id(&self) -> TypeId {
        self.ty_id
    }

    /// Check if the given type matches this one.
    #[inline]
    pub fn type_is<T: Any>(&self) -> bool {
        self.ty_id == TypeId::of::<T>()
    }

    /// Returns the field name.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the field's [`TypeInfo`].
    #[inline]
    pub fn type_info(&self) -> &'static TypeInfo {
        (self.type_info)()
    }

    /// Returns the field's annotations.
    #[inline]
    pub const fn tags(&self) -> &FieldTags {
        &self.tags
    }
}
