use proc_macro2::TokenStream;
use quote::quote;

#[inline(always)]
pub(crate) fn non_generic_type_info_cell_(tm_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #tm_reflect_path::impls::NonGenericTypeInfoCell
    }
}

#[inline(always)]
pub(crate) fn generic_type_info_cell_(tm_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #tm_reflect_path::impls::GenericTypeInfoCell
    }
}

#[inline(always)]
pub(crate) fn impls_(tm_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #tm_reflect_path::impls
    }
}
