//! Compile-time type information.
//!
//! ## Menu
//!
//! - [`TypePath`]: static type path and short name.
//! - [`DynamicTypePath`]: dynamic dispatch for `TypePath`.
//! - [`Type`]: a `TypeId` plus its `TypePath` accessors.
//! - [`Typed`] / [`DynamicTyped`]: static and dynamic access to [`TypeInfo`].
//! - [`TypeInfo`]: one of
//!     - [`StructInfo`]: a record, its [`NamedField`]s in declaration order
//!       and its named [`MethodInfo`]s.
//!     - [`OpaqueInfo`]: an atomic value.
//! - [`FieldTags`]: the raw `key = "value"` annotations of one field.
//! - [`MethodInfo`]: a named getter or setter bound to a record type.
//! - [`ReflectKind`]: `Struct` or `Opaque`.

// -----------------------------------------------------------------------------
// Modules

mod field_info;
mod field_tags;
mod kind;
mod method_info;
mod opaque_info;
mod struct_info;
mod type_info;
mod type_path;
mod typed;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use type_path::impl_type_fn;

// -----------------------------------------------------------------------------
// Exports

pub use field_info::NamedField;
pub use field_tags::FieldTags;
pub use kind::{ReflectKind, ReflectKindError};
pub use method_info::{GetterFn, MethodFn, MethodInfo, MethodKind, SetterFn};
pub use opaque_info::OpaqueInfo;
pub use struct_info::StructInfo;
pub use type_info::TypeInfo;
pub use type_path::{DynamicTypePath, Type, TypePath};
pub use typed::{DynamicTyped, Typed};
