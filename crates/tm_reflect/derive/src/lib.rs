//! See [`Reflect`].
#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(clippy::std_instead_of_core, reason = "proc-macro lib")]
#![allow(clippy::std_instead_of_alloc, reason = "proc-macro lib")]

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

static REFLECT_ATTRIBUTE_NAME: &str = "reflect";

// -----------------------------------------------------------------------------
// Modules

mod derive_data;
mod impls;
mod path;
mod utils;

// -----------------------------------------------------------------------------
// Macros

/// # Full Reflection Derivation
///
/// `#[derive(Reflect)]` on a struct with named fields implements:
///
/// - `TypePath`
/// - `Typed`
/// - `Reflect`
/// - `Struct`
/// - `FromReflect`
///
/// Tuple structs, unit structs and enums are rejected unless marked `opaque`.
///
/// ## Field Tags
///
/// `#[reflect(tag(key = "value", ...))]` attaches annotations to a field.
/// They are stored verbatim in the field's `NamedField::tags`, in order.
///
/// ```rust, ignore
/// #[derive(Reflect)]
/// struct User {
///     #[reflect(tag(map = "user_id"))]
///     id: u64,
///     #[reflect(tag(map_from = "display_name", map_to = "-"))]
///     name: String,
/// }
/// ```
///
/// A tag key may appear once per field.
///
/// ## Ignored Fields
///
/// `#[reflect(ignore)]` hides a field from reflection entirely. `FromReflect`
/// fills it with `Default::default()`. An ignored field cannot carry tags.
///
/// ## Methods
///
/// `#[reflect(getter(a, b), setter(c))]` registers inherent methods in the
/// type's `StructInfo`, callable by name through reflection.
///
/// - A getter is `fn(&self) -> R` where `R: Reflect` is an owned value.
/// - A setter is `fn(&mut self, A)` where `A: FromReflect`; a return value is discarded.
///
/// ```rust, ignore
/// #[derive(Reflect)]
/// #[reflect(getter(full_name), setter(set_full_name))]
/// struct Person { first: String, last: String }
/// ```
///
/// ## Opaque Types
///
/// `#[reflect(opaque, clone)]` treats the type as an atomic leaf, like a number
/// or a timestamp. It is never decomposed and only accepts the identical type.
/// `Clone` is required.
///
/// ## Optimization with Standard Traits
///
/// The macro cannot detect standard trait implementations, declare them:
///
/// - `clone`: assigning and converting from the same type uses `Clone`.
/// - `partial_eq`: `reflect_partial_eq` uses `PartialEq`.
/// - `debug`: `reflect_debug` uses `Debug`.
///
/// ## Auto Registration
///
/// `#[reflect(auto_register)]` submits the type's `TypeInfo` to the
/// `registered_types()` list when the `auto_register` feature is enabled.
/// It has no effect on generic types.
///
/// ## Generics
///
/// Type parameters are bounded by `Send + Sync + 'static` and every reflected
/// field type by `Reflect + Typed + FromReflect`. Lifetime parameters are not
/// supported.
#[proc_macro_derive(Reflect, attributes(reflect))]
pub fn derive_full_reflect(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);

    impls::match_reflect_impls(ast)
}
