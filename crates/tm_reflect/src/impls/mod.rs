//! Provide some utilities for implementing reflection traits.
//!
//! - [`concat`]: An efficient string concatenation function.
//! - [`NonGenericTypeInfoCell`]: Used to implement [`Typed`] for non-generic types.
//! - [`GenericTypePathCell`]: Used to implement [`TypePath`] for generic types.
//! - [`GenericTypeInfoCell`]: Used to implement [`Typed`] for generic types.
//! - `xxx_try_apply`, `xxx_partial_eq`, `struct_debug`: default bodies of the
//!   [`Reflect`](crate::Reflect) methods, used by the derive macro.
//!
//! ## Implemented Menu
//!
//! Every type below is opaque.
//!
//! - `bool`, `char`, `i8`-`i128`, `u8`-`u128`, `isize`, `usize`, `f32`, `f64`
//! - `&'static str`, `String`, `core::time::Duration`
//! - `Option<T>`, `Vec<T>`
//! - chrono: (`chrono` feature)
//!     - `DateTime<Utc>`, `DateTime<FixedOffset>`, `DateTime<Local>`
//!     - `NaiveDate`, `NaiveTime`, `NaiveDateTime`, `FixedOffset`, `TimeDelta`
//! - url: (`url` feature)
//!     - `Url`
//!
//! [`TypePath`]: crate::info::TypePath
//! [`Typed`]: crate::info::Typed

// -----------------------------------------------------------------------------
// Modules

mod cell;
mod common;
mod opaque;

mod generic;
mod primitives;

#[cfg(feature = "chrono")]
mod chrono;
#[cfg(feature = "url")]
mod url;

// -----------------------------------------------------------------------------
// Exports

pub use cell::{GenericTypeInfoCell, GenericTypePathCell, NonGenericTypeInfoCell};
pub use cell::{GenericTypeCell, NonGenericTypeCell, concat};
pub use common::{opaque_partial_eq, opaque_try_apply};
pub use common::{struct_debug, struct_partial_eq, struct_try_apply};
