#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]

// -----------------------------------------------------------------------------
// Extern Self

// Generated code names this crate `::tm_reflect`, which must also resolve
// inside the crate itself (unit tests derive their own fixtures).
extern crate self as tm_reflect;

// -----------------------------------------------------------------------------
// Alloc

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod reflection;

pub mod impls;
pub mod info;
pub mod ops;

// -----------------------------------------------------------------------------
// Top-Level exports

#[doc(hidden)]
pub mod __macro_exports;

pub use reflection::{FromReflect, Reflect};
pub use tm_reflect_derive as derive;

/// Type information of every record annotated `#[reflect(auto_register)]`
/// linked into the final binary.
#[cfg(feature = "auto_register")]
pub use __macro_exports::auto_register::registered_types;
