//! Interfaces for data operation.
//!
//! ## Menu
//!
//! - [`Struct`]: field access of a record (e.g. `A{ .. }`).
//! - [`ReflectRef`] / [`ReflectMut`]: the kind specific view of a value.
//! - [`ApplyError`]: failure of [`Reflect::try_apply`].
//! - [`MethodError`]: failure of a [`MethodInfo`] call.
//!
//! [`Reflect::try_apply`]: crate::Reflect::try_apply
//! [`MethodInfo`]: crate::info::MethodInfo

// -----------------------------------------------------------------------------
// Modules

mod apply_error;
mod kind;
mod method_error;
mod struct_ops;

// -----------------------------------------------------------------------------
// Exports

pub use apply_error::ApplyError;
pub use kind::{ReflectMut, ReflectRef};
pub use method_error::MethodError;
pub use struct_ops::{Struct, StructFieldIter};
