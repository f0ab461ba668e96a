use proc_macro2::TokenStream;
use quote::quote;

#[inline(always)]
pub(crate) fn struct_(tm_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #tm_reflect_path::ops::Struct
    }
}

#[inline(always)]
pub(crate) fn struct_field_iter_(tm_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #tm_reflect_path::ops::StructFieldIter
    }
}

#[inline(always)]
pub(crate) fn reflect_ref_(tm_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #tm_reflect_path::ops::ReflectRef
    }
}

#[inline(always)]
pub(crate) fn reflect_mut_(tm_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #tm_reflect_path::ops::ReflectMut
    }
}

#[inline(always)]
pub(crate) fn apply_error_(tm_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #tm_reflect_path::ops::ApplyError
    }
}
