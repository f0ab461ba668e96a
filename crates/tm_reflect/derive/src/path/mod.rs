//! This independent module is used to provide the required path.
//! So as to minimize changes when the `tm_reflect` structure is modified.

use proc_macro2::TokenStream;
use quote::quote;

// -----------------------------------------------------------------------------
// Crate Path

/// Get the correct access path to the `tm_reflect` crate.
///
/// 1. For crates that depend on `tm_reflect`, `::tm_reflect` is returned.
/// 2. For crates that depend on `tagmap`, `::tagmap::reflect` is returned.
/// 3. For other situations, `::tm_reflect` is returned, but this may be incorrect.
///
/// Reading the manifest is relatively expensive, so the path is obtained once
/// per invocation and passed around.
pub(crate) fn tm_reflect() -> syn::Path {
    tm_macro_utils::Manifest::shared(|manifest| manifest.get_crate_path("tm_reflect"))
}

// -----------------------------------------------------------------------------
// Modules

mod cell;
mod info;
mod ops;

pub(crate) mod fp;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use cell::*;
pub(crate) use info::*;
pub(crate) use ops::*;

#[inline(always)]
pub(crate) fn macro_utils_(tm_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #tm_reflect_path::__macro_exports::macro_utils
    }
}

#[cfg(feature = "auto_register")]
#[inline(always)]
pub(crate) fn auto_register_(tm_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #tm_reflect_path::__macro_exports::auto_register
    }
}

#[inline(always)]
pub(crate) fn reflect_(tm_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #tm_reflect_path::Reflect
    }
}

#[inline(always)]
pub(crate) fn from_reflect_(tm_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #tm_reflect_path::FromReflect
    }
}
