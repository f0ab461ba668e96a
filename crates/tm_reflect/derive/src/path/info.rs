use proc_macro2::TokenStream;
use quote::quote;

#[inline]
pub(crate) fn type_path_(tm_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #tm_reflect_path::info::TypePath
    }
}

#[inline(always)]
pub(crate) fn typed_(tm_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #tm_reflect_path::info::Typed
    }
}

#[inline(always)]
pub(crate) fn type_info_(tm_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #tm_reflect_path::info::TypeInfo
    }
}

#[inline(always)]
pub(crate) fn struct_info_(tm_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #tm_reflect_path::info::StructInfo
    }
}

#[inline(always)]
pub(crate) fn opaque_info_(tm_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #tm_reflect_path::info::OpaqueInfo
    }
}

#[inline(always)]
pub(crate) fn named_field_(tm_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #tm_reflect_path::info::NamedField
    }
}

#[inline(always)]
pub(crate) fn field_tags_(tm_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #tm_reflect_path::info::FieldTags
    }
}

#[inline(always)]
pub(crate) fn method_info_(tm_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #tm_reflect_path::info::MethodInfo
    }
}

#[inline(always)]
pub(crate) fn reflect_kind_(tm_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #tm_reflect_path::info::ReflectKind
    }
}
