use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::LitStr;

use crate::derive_data::ReflectMeta;

/// Generate `.with_methods(&[...])` for `#[reflect(getter(..), setter(..))]`.
///
/// Similar to following:
///
/// ```ignore
/// .with_methods(&[
///     _path_::MethodInfo::getter("name", |__this| {
///         macro_utils::call_getter::<Self, _>(__this, "name", Self::name)
///     }),
///     _path_::MethodInfo::setter("set_name", |__this, __value| {
///         macro_utils::call_setter::<Self, _, _>(__this, __value, "set_name", Self::set_name)
///     }),
/// ])
/// ```
pub(crate) fn get_methods_expression(meta: &ReflectMeta) -> TokenStream {
    let attrs = meta.attrs();
    if !attrs.has_methods() {
        return crate::utils::empty();
    }

    let tm_reflect_path = meta.tm_reflect_path();
    let method_info_ = crate::path::method_info_(tm_reflect_path);
    let macro_utils_ = crate::path::macro_utils_(tm_reflect_path);

    let getters = attrs.getters.iter().map(|ident| {
        let name = LitStr::new(&ident.to_string(), Span::call_site());
        quote! {
            #method_info_::getter(#name, |__this| {
                #macro_utils_::call_getter::<Self, _>(__this, #name, Self::#ident)
            })
        }
    });

    let setters = attrs.setters.iter().map(|ident| {
        let name = LitStr::new(&ident.to_string(), Span::call_site());
        quote! {
            #method_info_::setter(#name, |__this, __value| {
                #macro_utils_::call_setter::<Self, _, _>(__this, __value, #name, Self::#ident)
            })
        }
    });

    quote! {
        .with_methods(&[ #(#getters,)* #(#setters,)* ])
    }
}
