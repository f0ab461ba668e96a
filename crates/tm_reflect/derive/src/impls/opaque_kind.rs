use proc_macro2::TokenStream;
use quote::quote;

use super::{get_auto_register_impl, impl_trait_typed};

use crate::derive_data::ReflectMeta;
use crate::path::fp::{CloneFP, DebugFP, OptionFP, ResultFP};

/// Implement reflect for a type marked `#[reflect(opaque)]`.
///
/// The type is a leaf: its fields are never visited and a value is only
/// assigned from the identical type, which requires `Clone`.
pub(crate) fn impl_opaque(meta: &ReflectMeta) -> syn::Result<TokenStream> {
    let attrs = meta.attrs();
    if let Some(span) = attrs.opaque
        && attrs.avail_traits.clone.is_none()
    {
        return Err(syn::Error::new(
            span,
            "`opaque` types must implement `Clone` and declare it with `#[reflect(clone)]`",
        ));
    }
    if meta.impl_with_generic() {
        return Err(syn::Error::new_spanned(
            meta.ident(),
            "`opaque` types cannot have type parameters",
        ));
    }
    if attrs.has_methods() {
        let ident = attrs.getters.iter().chain(&attrs.setters).next();
        return Err(syn::Error::new_spanned(
            ident,
            "methods can only be registered on records, not on `opaque` types",
        ));
    }

    let tm_reflect_path = meta.tm_reflect_path();
    let reflect_ = crate::path::reflect_(tm_reflect_path);
    let from_reflect_ = crate::path::from_reflect_(tm_reflect_path);
    let reflect_kind_ = crate::path::reflect_kind_(tm_reflect_path);
    let reflect_ref_ = crate::path::reflect_ref_(tm_reflect_path);
    let reflect_mut_ = crate::path::reflect_mut_(tm_reflect_path);
    let apply_error_ = crate::path::apply_error_(tm_reflect_path);
    let type_info_ = crate::path::type_info_(tm_reflect_path);
    let opaque_info_ = crate::path::opaque_info_(tm_reflect_path);
    let impls_ = crate::path::impls_(tm_reflect_path);

    let type_path_trait_tokens = meta.type_path_tokens();
    let typed_trait_tokens = impl_trait_typed(
        meta,
        quote!(#type_info_::Opaque(#opaque_info_::new::<Self>())),
    );

    let partial_eq_tokens = if attrs.avail_traits.partial_eq.is_some() {
        quote! {
            fn reflect_partial_eq(&self, __value: &dyn #reflect_) -> #OptionFP<bool> {
                #impls_::opaque_partial_eq(self, __value)
            }
        }
    } else {
        crate::utils::empty()
    };

    let debug_tokens = if attrs.avail_traits.debug.is_some() {
        quote! {
            fn reflect_debug(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                #DebugFP::fmt(self, f)
            }
        }
    } else {
        crate::utils::empty()
    };

    let auto_register_tokens = get_auto_register_impl(meta);

    let ident = meta.ident();
    let (impl_generics, ty_generics, where_clause) = meta.split_generics();

    Ok(quote! {
        #type_path_trait_tokens

        #typed_trait_tokens

        impl #impl_generics #reflect_ for #ident #ty_generics #where_clause {
            #[inline]
            fn reflect_kind(&self) -> #reflect_kind_ {
                #reflect_kind_::Opaque
            }

            #[inline]
            fn reflect_ref(&self) -> #reflect_ref_<'_> {
                #reflect_ref_::Opaque(self)
            }

            #[inline]
            fn reflect_mut(&mut self) -> #reflect_mut_<'_> {
                #reflect_mut_::Opaque(self)
            }

            #[inline]
            fn try_apply(&mut self, __value: &dyn #reflect_) -> #ResultFP<(), #apply_error_> {
                #impls_::opaque_try_apply(self, __value)
            }

            #partial_eq_tokens

            #debug_tokens
        }

        impl #impl_generics #from_reflect_ for #ident #ty_generics #where_clause {
            #[inline]
            fn from_reflect(__input: &dyn #reflect_) -> #OptionFP<Self> {
                __input.downcast_ref::<Self>().map(#CloneFP::clone)
            }
        }

        #auto_register_tokens
    })
}
